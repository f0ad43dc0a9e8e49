use path_fuzzy_match::{fuzzy_match, segments};
use rand::{random, thread_rng, Rng};

fn random_string(min_length: usize, max_length: usize) -> String {
    let length = thread_rng().gen_range(min_length..=max_length);
    let mut chars = Vec::new();
    if thread_rng().gen_range(0..10) == 0 {
        for _ in 0..length {
            chars.push(random::<char>());
        }
    } else if thread_rng().gen_range(0..10) < 8 {
        for _ in 0..length {
            chars.push(thread_rng().gen_range(' '..='~'));
        }
    } else {
        for _ in 0..length {
            chars.push(thread_rng().gen_range('0'..='z'));
        }
    }
    chars.into_iter().collect()
}

fn main() {
    loop {
        let query = random_string(1, 10);
        let query_len = query.chars().count();

        for _ in 0..10 {
            let candidate = random_string(1, 30);
            if let Some(result) = fuzzy_match(&query, &candidate) {
                assert_eq!(result.matched_indices.len(), query_len);
                for pair in result.matched_indices.windows(2) {
                    assert!(pair[0] < pair[1]);
                }

                let spans = segments(&candidate, &result.matched_indices);
                let rendered: String = spans.iter().map(|s| s.text.as_str()).collect();
                assert_eq!(rendered, candidate);
                for pair in spans.windows(2) {
                    assert_ne!(pair[0].highlighted, pair[1].highlighted);
                }
            }
        }
    }
}
