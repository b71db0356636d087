//! Message counter driving the plural examples.

/// Signed counter; going below zero is allowed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Counter::default().value(), 0);
    }

    #[test]
    fn steps_by_one_and_goes_negative() {
        let mut counter = Counter::default();
        counter.increment();
        counter.increment();
        assert_eq!(counter.value(), 2);
        counter.decrement();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value(), -1);
    }

    #[test]
    fn saturates_at_the_bounds() {
        let mut high = Counter::new(i64::MAX);
        high.increment();
        assert_eq!(high.value(), i64::MAX);

        let mut low = Counter::new(i64::MIN);
        low.decrement();
        assert_eq!(low.value(), i64::MIN);
    }
}
