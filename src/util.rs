#[derive(Debug, Default)]
pub struct ByteStr<B>(pub B);

impl<B: AsRef<[u8]>> std::fmt::Display for ByteStr<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .as_ref()
                .iter()
                .map(|&b| b as char)
                .collect::<String>()
        )
    }
}

/// Round to one decimal
pub fn round1(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

/// Round to two decimal
pub fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}
