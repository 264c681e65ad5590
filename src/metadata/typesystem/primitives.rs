use std::fmt::Write;

/// A constant recorded in the default-value table of a package
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConstantValue {
    /// The `null` reference
    #[default]
    Null,
    /// Boolean value
    Boolean(bool),
    /// Character value
    Char(char),
    /// 8-bit signed integer
    I1(i8),
    /// 8-bit unsigned integer
    U1(u8),
    /// 16-bit signed integer
    I2(i16),
    /// 16-bit unsigned integer
    U2(u16),
    /// 32-bit signed integer
    I4(i32),
    /// 32-bit unsigned integer
    U4(u32),
    /// 64-bit signed integer
    I8(i64),
    /// 64-bit unsigned integer
    U8(u64),
    /// 32-bit floating point
    R4(f32),
    /// 64-bit floating point
    R8(f64),
    /// String value
    String(String),
}

impl ConstantValue {
    /// Render this value as a C# literal, e.g. `true`, `1.5f`, `"a\"b"` or `'\x000a'`
    #[must_use]
    pub fn to_csharp_literal(&self) -> String {
        match self {
            ConstantValue::Null => "null".to_string(),
            ConstantValue::Boolean(value) => value.to_string(),
            ConstantValue::Char(value) => {
                let code = u32::from(*value);
                if (32..=126).contains(&code) {
                    match value {
                        '\'' => "'\\''".to_string(),
                        '\\' => "'\\\\'".to_string(),
                        _ => format!("'{value}'"),
                    }
                } else {
                    format!("'\\x{code:04x}'")
                }
            }
            ConstantValue::I1(value) => value.to_string(),
            ConstantValue::U1(value) => value.to_string(),
            ConstantValue::I2(value) => value.to_string(),
            ConstantValue::U2(value) => value.to_string(),
            ConstantValue::I4(value) => value.to_string(),
            ConstantValue::U4(value) => value.to_string(),
            ConstantValue::I8(value) => value.to_string(),
            ConstantValue::U8(value) => value.to_string(),
            ConstantValue::R4(value) => match special_float("float", f64::from(*value)) {
                Some(special) => special,
                None => format!("{value}f"),
            },
            ConstantValue::R8(value) => {
                special_float("double", *value).unwrap_or_else(|| value.to_string())
            }
            ConstantValue::String(value) => escape_string(value),
        }
    }
}

/// `float.NaN`, `double.PositiveInfinity` and the like for values without a literal form
fn special_float(keyword: &str, value: f64) -> Option<String> {
    let name = if value.is_nan() {
        "NaN"
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "PositiveInfinity"
        } else {
            "NegativeInfinity"
        }
    } else {
        return None;
    };

    Some(format!("{keyword}.{name}"))
}

fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\0' => escaped.push_str("\\0"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(escaped, "\\x{:04x}", u32::from(c));
            }
            c => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}
