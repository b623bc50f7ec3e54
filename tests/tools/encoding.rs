use daily_tools::tools::{base64_decode, base64_encode, md5_hash, url_decode, url_encode};

const SAMPLES: &[&str] = &[
    "",
    "Hello World 你好世界",
    "https://example.com/search?q=hello world&lang=zh",
    "100% sure + a/b=c",
    "emoji 🦀 and tabs\tand\nnewlines",
];

#[test]
fn test_base64_round_trip() {
    for text in SAMPLES {
        assert_eq!(base64_decode(&base64_encode(text)).unwrap(), *text);
    }
}

#[test]
fn test_url_round_trip() {
    for text in SAMPLES {
        assert_eq!(url_decode(&url_encode(text)), *text);
    }
}

#[test]
fn test_url_encode_has_no_safe_punctuation() {
    let encoded = url_encode("https://example.com/search?q=hello world&lang=zh");
    assert_eq!(
        encoded,
        "https%3A%2F%2Fexample.com%2Fsearch%3Fq%3Dhello%20world%26lang%3Dzh"
    );
}

#[test]
fn test_md5_is_stable_lowercase_hex() {
    for text in SAMPLES {
        let digest = md5_hash(text);
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_eq!(digest, md5_hash(text));
    }
}

#[test]
fn test_base64_decode_failure_is_a_message() {
    let err = base64_decode("not-valid-base64!!").unwrap_err();
    assert!(err.to_string().starts_with("Decoding failed"));
}
