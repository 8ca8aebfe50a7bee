//! IDL type-aware value parsing from CLI strings.
//!
//! Values end up as PDA seeds, so each one knows its seed encoding:
//! integers little-endian at their full width, strings as UTF-8, keys as
//! their 32 raw bytes.

use anchor_inspector_core::idl::IdlType;
use anchor_inspector_core::pubkey::Pubkey;
use serde_json::Value;

use crate::hex::{decode_pubkey, hex_decode, hex_encode};

/// A parsed CLI value with type information preserved.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Bool(bool),
    Unsigned { value: u128, width: usize },
    Signed { value: i128, width: usize },
    Str(String),
    Pubkey(Pubkey),
    Bytes(Vec<u8>),
}

impl ParsedValue {
    /// Bytes this value contributes to a PDA seed list.
    pub fn to_seed_bytes(&self) -> Vec<u8> {
        match self {
            ParsedValue::Bool(b) => vec![*b as u8],
            ParsedValue::Unsigned { value, width } => value.to_le_bytes()[..*width].to_vec(),
            ParsedValue::Signed { value, width } => value.to_le_bytes()[..*width].to_vec(),
            ParsedValue::Str(s) => s.as_bytes().to_vec(),
            ParsedValue::Pubkey(key) => key.to_bytes().to_vec(),
            ParsedValue::Bytes(bytes) => bytes.clone(),
        }
    }
}

impl std::fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsedValue::Bool(v) => write!(f, "{}", v),
            ParsedValue::Unsigned { value, .. } => write!(f, "{}", value),
            ParsedValue::Signed { value, .. } => write!(f, "{}", value),
            ParsedValue::Str(s) => write!(f, "\"{}\"", s),
            ParsedValue::Pubkey(key) => write!(f, "{}", key),
            ParsedValue::Bytes(bytes) => {
                if let Ok(s) = std::str::from_utf8(bytes) {
                    if !s.is_empty() && s.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
                        return write!(f, "\"{}\" (hex: {})", s, hex_encode(bytes));
                    }
                }
                write!(f, "0x{}", hex_encode(bytes))
            }
        }
    }
}

/// Parse a CLI string value according to its IDL type.
pub fn parse_value(raw: &str, ty: &IdlType) -> Result<ParsedValue, String> {
    match ty {
        IdlType::Primitive(p) => parse_primitive(raw, p),
        IdlType::Array { array } => parse_array(raw, &array.0, array.1),
        IdlType::Vec { vec } if **vec == IdlType::Primitive("u8".to_string()) => {
            parse_bytes(raw).map(ParsedValue::Bytes)
        }
        other => Err(format!("Type {:?} cannot be used as a PDA seed", other)),
    }
}

/// Encode a `const` seed's literal JSON value according to its IDL type.
pub fn parse_const(value: &Value, ty: &IdlType) -> Result<ParsedValue, String> {
    match value {
        Value::String(s) => parse_value(s, ty),
        Value::Number(n) => parse_value(&n.to_string(), ty),
        Value::Bool(b) => parse_value(&b.to_string(), ty),
        Value::Array(_) => serde_json::from_value::<Vec<u8>>(value.clone())
            .map(ParsedValue::Bytes)
            .map_err(|e| format!("Const seed is not a byte array: {}", e)),
        other => Err(format!("Unsupported const seed value: {}", other)),
    }
}

fn parse_primitive(raw: &str, prim: &str) -> Result<ParsedValue, String> {
    let unsigned = |width: usize| -> Result<ParsedValue, String> {
        let value = raw
            .parse::<u128>()
            .map_err(|e| format!("Invalid {} '{}': {}", prim, raw, e))?;
        if width < 16 && value >> (width * 8) != 0 {
            return Err(format!("Value {} does not fit in {}", value, prim));
        }
        Ok(ParsedValue::Unsigned { value, width })
    };
    let signed = |width: usize| -> Result<ParsedValue, String> {
        let value = raw
            .parse::<i128>()
            .map_err(|e| format!("Invalid {} '{}': {}", prim, raw, e))?;
        let bits = width as u32 * 8;
        if width < 16 && (value < -(1i128 << (bits - 1)) || value >= 1i128 << (bits - 1)) {
            return Err(format!("Value {} does not fit in {}", value, prim));
        }
        Ok(ParsedValue::Signed { value, width })
    };

    match prim {
        "u8" => unsigned(1),
        "u16" => unsigned(2),
        "u32" => unsigned(4),
        "u64" => unsigned(8),
        "u128" => unsigned(16),
        "i8" => signed(1),
        "i16" => signed(2),
        "i32" => signed(4),
        "i64" => signed(8),
        "i128" => signed(16),
        "bool" => match raw {
            "true" | "1" | "yes" => Ok(ParsedValue::Bool(true)),
            "false" | "0" | "no" => Ok(ParsedValue::Bool(false)),
            _ => Err(format!("Invalid bool '{}': expected true/false", raw)),
        },
        "string" | "String" => Ok(ParsedValue::Str(raw.to_string())),
        "publicKey" | "pubkey" => decode_pubkey(raw).map(ParsedValue::Pubkey),
        "bytes" => parse_bytes(raw).map(ParsedValue::Bytes),
        other => Err(format!("Primitive type '{}' cannot be used as a PDA seed", other)),
    }
}

/// `[1,2,3]` JSON literal or `0x`-prefixed hex.
fn parse_bytes(raw: &str) -> Result<Vec<u8>, String> {
    if raw.trim_start().starts_with('[') {
        return serde_json::from_str::<Vec<u8>>(raw)
            .map_err(|e| format!("Invalid byte array '{}': {}", raw, e));
    }
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => hex_decode(hex),
        None => Err(format!("Invalid bytes '{}': expected [n, ...] or 0x-prefixed hex", raw)),
    }
}

fn parse_array(raw: &str, elem_type: &IdlType, size: usize) -> Result<ParsedValue, String> {
    match elem_type {
        IdlType::Primitive(p) if p == "u8" => {
            let bytes = if raw.trim_start().starts_with('[') || raw.starts_with("0x") || raw.starts_with("0X") {
                parse_bytes(raw)?
            } else if raw.len() == size * 2 && raw.chars().all(|c| c.is_ascii_hexdigit()) {
                hex_decode(raw)?
            } else {
                let str_bytes = raw.as_bytes();
                if str_bytes.len() > size {
                    return Err(format!("String '{}' is {} bytes, max {} for [u8; {}]", raw, str_bytes.len(), size, size));
                }
                let mut bytes = vec![0u8; size];
                bytes[..str_bytes.len()].copy_from_slice(str_bytes);
                bytes
            };
            if bytes.len() != size {
                return Err(format!("Expected {} bytes, got {}", size, bytes.len()));
            }
            Ok(ParsedValue::Bytes(bytes))
        }
        other => Err(format!("Array of {:?} cannot be used as a PDA seed", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prim(name: &str) -> IdlType {
        IdlType::Primitive(name.to_string())
    }

    #[test]
    fn test_integers_use_full_width() {
        let v = parse_value("1000", &prim("u64")).unwrap();
        assert_eq!(v.to_seed_bytes(), vec![0xe8, 0x03, 0, 0, 0, 0, 0, 0]);
        let v = parse_value("-1", &prim("i16")).unwrap();
        assert_eq!(v.to_seed_bytes(), vec![0xff, 0xff]);
        let v = parse_value("7", &prim("u8")).unwrap();
        assert_eq!(v.to_seed_bytes(), vec![7]);
    }

    #[test]
    fn test_integer_range_checks() {
        assert!(parse_value("256", &prim("u8")).is_err());
        assert!(parse_value("128", &prim("i8")).is_err());
        assert!(parse_value("-129", &prim("i8")).is_err());
        assert!(parse_value("-128", &prim("i8")).is_ok());
        assert!(parse_value("-1", &prim("u32")).is_err());
        assert!(parse_value(&u128::MAX.to_string(), &prim("u128")).is_ok());
    }

    #[test]
    fn test_string_and_bool() {
        assert_eq!(parse_value("vault", &prim("string")).unwrap().to_seed_bytes(), b"vault".to_vec());
        assert_eq!(parse_value("yes", &prim("bool")).unwrap(), ParsedValue::Bool(true));
        assert!(parse_value("maybe", &prim("bool")).is_err());
    }

    #[test]
    fn test_pubkey() {
        let key = Pubkey::from([4u8; 32]);
        let v = parse_value(&key.to_string(), &prim("publicKey")).unwrap();
        assert_eq!(v.to_seed_bytes(), vec![4u8; 32]);
    }

    #[test]
    fn test_fixed_byte_arrays() {
        let ty = IdlType::Array { array: (Box::new(prim("u8")), 4) };
        assert_eq!(parse_value("ab", &ty).unwrap().to_seed_bytes(), vec![b'a', b'b', 0, 0]);
        assert_eq!(parse_value("0102aaff", &ty).unwrap().to_seed_bytes(), vec![1, 2, 0xaa, 0xff]);
        assert_eq!(parse_value("[1,2,3,4]", &ty).unwrap().to_seed_bytes(), vec![1, 2, 3, 4]);
        assert!(parse_value("[1,2]", &ty).is_err());
        assert!(parse_value("toolong", &ty).is_err());
    }

    #[test]
    fn test_const_values() {
        let v = parse_const(&Value::String("metadata".into()), &prim("string")).unwrap();
        assert_eq!(v.to_seed_bytes(), b"metadata".to_vec());
        let ty = IdlType::Array { array: (Box::new(prim("u8")), 2) };
        let v = parse_const(&serde_json::json!([5, 6]), &ty).unwrap();
        assert_eq!(v.to_seed_bytes(), vec![5, 6]);
        let v = parse_const(&serde_json::json!(3), &prim("u16")).unwrap();
        assert_eq!(v.to_seed_bytes(), vec![3, 0]);
    }

    #[test]
    fn test_unsupported_types() {
        let ty = IdlType::Defined { defined: "Config".to_string() };
        assert!(parse_value("x", &ty).is_err());
        assert!(parse_value("1.5", &prim("f32")).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ParsedValue::Bytes(b"hi".to_vec()).to_string(), "\"hi\" (hex: 6869)");
        assert_eq!(ParsedValue::Bytes(vec![0, 1]).to_string(), "0x0001");
    }
}
