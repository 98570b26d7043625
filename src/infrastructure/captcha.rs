//! Additive math challenge shown on the profile form before submission.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    a: u8,
    b: u8,
}

impl Challenge {
    pub fn new(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    pub fn prompt(&self) -> String {
        format!("What is {} + {}?", self.a, self.b)
    }

    /// Accepts the typed answer; anything that is not the exact sum fails.
    pub fn verify(&self, answer: &str) -> bool {
        answer
            .trim()
            .parse::<u16>()
            .map(|n| n == self.a as u16 + self.b as u16)
            .unwrap_or(false)
    }
}

pub struct MathCaptcha;

impl MathCaptcha {
    /// Two operands in 1..=10, same range the hosted form used.
    pub fn generate() -> Challenge {
        let mut rng = rand::thread_rng();
        Challenge::new(rng.gen_range(1..=10), rng.gen_range(1..=10))
    }
}
