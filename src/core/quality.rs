const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyzBCDFGHJKLMNPQRSTVWXYZ";
const VOWELS: &str = "aeiouAEIOU";

pub fn has_consecutive_consonants(name: &str, count: usize) -> bool {
    let mut consecutive = 0;
    for ch in name.chars() {
        if CONSONANTS.contains(ch) {
            consecutive += 1;
            if consecutive >= count {
                return true;
            }
        } else {
            consecutive = 0;
        }
    }
    false
}

/// 名稱易讀程度的粗略分數，僅供顯示與匯出使用
pub fn score_name(name: &str) -> u32 {
    let mut score: i32 = 100;
    let length = name.chars().count();

    if length < 4 {
        score -= 30;
    } else if length > 15 {
        score -= 20;
    } else if (6..=12).contains(&length) {
        score += 10;
    }

    if has_consecutive_consonants(name, 3) {
        score -= 25;
    }

    if length > 0 {
        let vowels = name.chars().filter(|c| VOWELS.contains(*c)).count();
        let ratio = vowels as f64 / length as f64;
        if (0.3..=0.5).contains(&ratio) {
            score += 10;
        }
    }

    score.max(0) as u32
}
