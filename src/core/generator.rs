use crate::domain::model::{GeneratedResult, WordCount};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// 單次呼叫最多保留的組合數
pub const MAX_COMBINATIONS: usize = 100;

/// 以關鍵字排列組合產生品牌名稱候選。
///
/// `seed_text` 去除空白後若非空，會放在工作清單最前面再一起洗牌。
/// 洗牌只影響哪些組合能進入前 100 筆，不影響結果正確性。
/// 截斷發生在去重之前，因此有重複關鍵字時結果可能少於 100 筆。
///
/// 此函式沒有共享狀態，不會失敗；空的關鍵字清單回傳空結果。
pub fn generate_names<R: Rng + ?Sized>(
    keywords: &[String],
    seed_text: &str,
    word_count: WordCount,
    prefix: &str,
    separator: &str,
    rng: &mut R,
) -> Vec<GeneratedResult> {
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut working: Vec<&str> = Vec::with_capacity(keywords.len() + 1);
    let seed = seed_text.trim();
    if !seed.is_empty() {
        working.push(seed);
    }
    working.extend(keywords.iter().map(String::as_str));
    working.shuffle(rng);

    let combinations = index_combinations(working.len(), word_count, MAX_COMBINATIONS);
    tracing::debug!(
        pool = working.len(),
        word_count = %word_count,
        combinations = combinations.len(),
        "Generated keyword combinations"
    );

    let mut seen: HashSet<String> = HashSet::with_capacity(combinations.len());
    let mut results = Vec::with_capacity(combinations.len());

    for combination in combinations {
        let name = combination
            .iter()
            .map(|&index| working[index])
            .collect::<Vec<_>>()
            .join(separator);

        if !seen.insert(name.clone()) {
            continue;
        }

        let full_name = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{} {}", prefix, name)
        };
        results.push(GeneratedResult { name, full_name });
    }

    results
}

/// 依字典序列出索引互不相同的有序組合，最多 `limit` 筆
fn index_combinations(len: usize, word_count: WordCount, limit: usize) -> Vec<Vec<usize>> {
    match word_count {
        WordCount::Two => ordered_pairs(len)
            .take(limit)
            .map(|[i, j]| vec![i, j])
            .collect(),
        WordCount::Three => ordered_triples(len)
            .take(limit)
            .map(|[i, j, k]| vec![i, j, k])
            .collect(),
    }
}

fn ordered_pairs(len: usize) -> impl Iterator<Item = [usize; 2]> {
    (0..len).flat_map(move |i| (0..len).filter(move |&j| j != i).map(move |j| [i, j]))
}

fn ordered_triples(len: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..len).flat_map(move |i| {
        (0..len).filter(move |&j| j != i).flat_map(move |j| {
            (0..len)
                .filter(move |&k| k != i && k != j)
                .map(move |k| [i, j, k])
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn names(results: &[GeneratedResult]) -> HashSet<String> {
        results.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_empty_keywords_return_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let results = generate_names(&[], "Warung", WordCount::Three, "PT", "-", &mut rng);
        assert!(results.is_empty());
    }

    #[test]
    fn test_single_keyword_has_no_pairs() {
        let mut rng = StdRng::seed_from_u64(1);
        let results = generate_names(&words(&["A"]), "", WordCount::Two, "", "", &mut rng);
        assert!(results.is_empty());
    }

    #[test]
    fn test_two_keywords_produce_both_orders() {
        let mut rng = StdRng::seed_from_u64(7);
        let results = generate_names(&words(&["Maju", "Jaya"]), "", WordCount::Two, "", "", &mut rng);

        assert_eq!(results.len(), 2);
        assert_eq!(
            names(&results),
            HashSet::from(["MajuJaya".to_string(), "JayaMaju".to_string()])
        );
        for result in &results {
            assert_eq!(result.name, result.full_name);
        }
    }

    #[test]
    fn test_seed_text_joins_working_list() {
        let mut rng = StdRng::seed_from_u64(3);
        let results = generate_names(&words(&["Sedap"]), "  Warung ", WordCount::Two, "", " ", &mut rng);

        assert_eq!(
            names(&results),
            HashSet::from(["Warung Sedap".to_string(), "Sedap Warung".to_string()])
        );
    }

    #[test]
    fn test_whitespace_seed_is_ignored() {
        let mut rng = StdRng::seed_from_u64(3);
        let results = generate_names(&words(&["Sedap"]), "   ", WordCount::Two, "", " ", &mut rng);
        assert!(results.is_empty());
    }

    #[test]
    fn test_prefix_only_touches_full_name() {
        let mut rng = StdRng::seed_from_u64(11);
        let results = generate_names(&words(&["Maju", "Jaya"]), "", WordCount::Two, "PT", "", &mut rng);

        for result in &results {
            assert_eq!(result.full_name, format!("PT {}", result.name));
            assert!(!result.name.starts_with("PT"));
        }
    }

    #[test]
    fn test_three_words_from_three_keywords() {
        let mut rng = StdRng::seed_from_u64(5);
        let results = generate_names(
            &words(&["Kopi", "Senja", "Kita"]),
            "",
            WordCount::Three,
            "",
            "-",
            &mut rng,
        );

        assert_eq!(results.len(), 6);
        for result in &results {
            let parts: Vec<&str> = result.name.split('-').collect();
            assert_eq!(parts.len(), 3);
            let unique: HashSet<&str> = parts.iter().copied().collect();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_duplicate_keywords_collapse_after_join() {
        let mut rng = StdRng::seed_from_u64(9);
        let results = generate_names(&words(&["A", "A", "B"]), "", WordCount::Two, "", "", &mut rng);

        assert_eq!(
            names(&results),
            HashSet::from(["AA".to_string(), "AB".to_string(), "BA".to_string()])
        );
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let mut rng = StdRng::seed_from_u64(2);
        let results = generate_names(&words(&["ab", "AB"]), "", WordCount::Two, "", "", &mut rng);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_output_capped_at_one_hundred() {
        let keywords: Vec<String> = (0..11).map(|i| format!("K{:02}", i)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let results = generate_names(&keywords, "", WordCount::Two, "", "", &mut rng);

        assert_eq!(results.len(), MAX_COMBINATIONS);
        assert_eq!(names(&results).len(), MAX_COMBINATIONS);
    }

    #[test]
    fn test_same_seed_same_output() {
        let keywords = words(&["Nusa", "Karya", "Mandiri", "Abadi", "Sentosa"]);
        let first = generate_names(
            &keywords,
            "Toko",
            WordCount::Three,
            "CV",
            " ",
            &mut StdRng::seed_from_u64(2024),
        );
        let second = generate_names(
            &keywords,
            "Toko",
            WordCount::Three,
            "CV",
            " ",
            &mut StdRng::seed_from_u64(2024),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_combination_enumeration() {
        assert_eq!(index_combinations(3, WordCount::Two, 100).len(), 6);
        assert_eq!(index_combinations(3, WordCount::Three, 100).len(), 6);
        assert_eq!(index_combinations(6, WordCount::Three, 100).len(), 100);
        assert_eq!(index_combinations(2, WordCount::Three, 100).len(), 0);
        assert_eq!(
            index_combinations(3, WordCount::Two, 2),
            vec![vec![0, 1], vec![0, 2]]
        );
    }
}
