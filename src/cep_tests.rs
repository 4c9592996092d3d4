#[cfg(test)]
mod tests {
    use crate::cep::Cep;

    #[test]
    fn test_parse_hyphenated() {
        let cep = Cep::parse("01310-100").unwrap();
        assert_eq!(cep.digits(), "01310100");
        assert_eq!(cep.to_string(), "01310-100");
    }

    #[test]
    fn test_parse_digits_only() {
        let cep = Cep::parse("03195970").unwrap();
        assert_eq!(cep.digits(), "03195970");
        assert_eq!(cep.to_string(), "03195-970");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let cep = Cep::parse("  01310-100 ").unwrap();
        assert_eq!(cep.digits(), "01310100");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let inputs = [
            "",
            "1310-100",
            "013101000",
            "01310_100",
            "01310-10",
            "0131010O",
            "abcde-fgh",
            "01 310100"
        ];
        for input in &inputs {
            assert!(Cep::parse(input).is_err(), "'{}' should be rejected", input);
        }
    }

    #[test]
    fn test_parse_keeps_original_input_in_error() {
        let err = Cep::parse("99").unwrap_err();
        assert_eq!(err.input, "99");
    }
}
