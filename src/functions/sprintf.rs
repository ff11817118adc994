use crate::value::Value;

/// Directive formatter behind the `sprintf` builtin. Each conversion
/// consumes the next argument; absent or `Nil` arguments coerce to 0
/// (numeric conversions) or the empty string, which is what makes
/// offset padding format as skipped positions.
pub(crate) fn format_sprintf(fmt: &str, args: &[Value]) -> String {
    let mut chars = fmt.chars().peekable();
    let mut out = String::new();
    let mut next_arg = 0usize;
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }
        let mut flags = String::new();
        while let Some(f) = chars.peek().copied() {
            if f == '-' || f == '+' || f == ' ' || f == '#' || f == '0' {
                flags.push(f);
                chars.next();
            } else {
                break;
            }
        }
        let mut width = String::new();
        while let Some(d) = chars.peek().copied() {
            if d.is_ascii_digit() {
                width.push(d);
                chars.next();
            } else {
                break;
            }
        }
        let mut precision = String::new();
        if chars.peek() == Some(&'.') {
            chars.next();
            while let Some(d) = chars.peek().copied() {
                if d.is_ascii_digit() {
                    precision.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
        }
        let spec = chars.next().unwrap_or('s');
        let width_num = width.parse::<usize>().unwrap_or(0);
        let prec_num = precision.parse::<usize>().ok();
        let zero_pad = flags.contains('0') && !flags.contains('-');
        let left_align = flags.contains('-');
        let plus_sign = flags.contains('+');
        let hash_flag = flags.contains('#');
        let arg = args.get(next_arg);
        next_arg += 1;
        let int_val = || arg.and_then(Value::as_int).unwrap_or(0);
        let float_val = || arg.and_then(Value::as_num).unwrap_or(0.0);
        let radix_val = |radix: u32| {
            let i = int_val();
            let digits = match radix {
                2 => format!("{:b}", i.unsigned_abs()),
                8 => format!("{:o}", i.unsigned_abs()),
                _ => format!("{:x}", i.unsigned_abs()),
            };
            if i < 0 { format!("-{}", digits) } else { digits }
        };
        let rendered = match spec {
            's' => {
                let s = arg.map(Value::to_string_value).unwrap_or_default();
                if let Some(p) = prec_num {
                    s.chars().take(p).collect()
                } else {
                    s
                }
            }
            'd' | 'i' => {
                let i = int_val();
                if plus_sign && i >= 0 {
                    format!("+{}", i)
                } else {
                    i.to_string()
                }
            }
            'u' => {
                let i = int_val();
                if i < 0 {
                    "0".to_string()
                } else {
                    i.to_string()
                }
            }
            'x' => {
                let hex = radix_val(16);
                if hash_flag { format!("0x{}", hex) } else { hex }
            }
            'X' => {
                let hex = radix_val(16).to_uppercase();
                if hash_flag { format!("0X{}", hex) } else { hex }
            }
            'o' => {
                let oct = radix_val(8);
                if hash_flag { format!("0o{}", oct) } else { oct }
            }
            'b' | 'B' => {
                let mut bin = radix_val(2);
                if spec == 'B' {
                    bin = bin.to_uppercase();
                }
                if hash_flag { format!("0b{}", bin) } else { bin }
            }
            'f' | 'F' => {
                let f = float_val();
                let p = prec_num.unwrap_or(6);
                if plus_sign && f >= 0.0 {
                    format!("+{:.*}", p, f)
                } else {
                    format!("{:.*}", p, f)
                }
            }
            'e' => {
                let f = float_val();
                if let Some(p) = prec_num {
                    format!("{:.*e}", p, f)
                } else {
                    format!("{:e}", f)
                }
            }
            'E' => {
                let f = float_val();
                if let Some(p) = prec_num {
                    format!("{:.*E}", p, f)
                } else {
                    format!("{:E}", f)
                }
            }
            'g' | 'G' => {
                let f = float_val();
                if let Some(p) = prec_num {
                    format!("{:.*}", p, f)
                } else {
                    format!("{}", f)
                }
            }
            'c' => {
                let i = int_val();
                char::from_u32(i as u32).unwrap_or('\0').to_string()
            }
            _ => arg.map(Value::to_string_value).unwrap_or_default(),
        };
        let rendered_width = rendered.chars().count();
        if width_num > rendered_width {
            let pad_len = width_num - rendered_width;
            let pad_char = if zero_pad { '0' } else { ' ' };
            let pad: String = std::iter::repeat_n(pad_char, pad_len).collect();
            if left_align {
                out.push_str(&rendered);
                out.push_str(&pad);
            } else {
                out.push_str(&pad);
                out.push_str(&rendered);
            }
        } else {
            out.push_str(&rendered);
        }
    }
    out
}
