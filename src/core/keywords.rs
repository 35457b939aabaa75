/// 解析批次輸入的關鍵字，支援換行、逗號、分號分隔
pub fn parse_bulk_keywords(text: &str) -> Vec<String> {
    text.split(['\n', ',', ';'])
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_delimiters() {
        let parsed = parse_bulk_keywords("Tech, Soft, Code, Data\nCloud; Smart,Digital\r\n Net ,,;");
        assert_eq!(
            parsed,
            vec!["Tech", "Soft", "Code", "Data", "Cloud", "Smart", "Digital", "Net"]
        );
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_bulk_keywords(" \n , ; ").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(parse_bulk_keywords("Jaya,Jaya"), vec!["Jaya", "Jaya"]);
    }
}
