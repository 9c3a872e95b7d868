use std::time::Duration;

pub const ROLE_ROTATION_PERIOD: Duration = Duration::from_millis(2_500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotatingTicker<'a> {
    items: &'a [&'a str],
    index: usize,
}

impl<'a> RotatingTicker<'a> {
    pub fn new(items: &'a [&'a str]) -> Self {
        Self { items, index: 0 }
    }

    pub fn tick(&mut self) -> usize {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'a str> {
        self.items.get(self.index).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn period_millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [&str; 4] = ["one", "two", "three", "four"];

    #[test]
    fn index_after_n_ticks_is_n_mod_len() {
        for ticks in 0..25 {
            let mut ticker = RotatingTicker::new(&ROLES);
            for _ in 0..ticks {
                ticker.tick();
            }
            assert_eq!(ticker.index(), ticks % ROLES.len());
        }
    }

    #[test]
    fn nine_ticks_over_four_items_lands_on_second() {
        let mut ticker = RotatingTicker::new(&ROLES);
        for _ in 0..9 {
            ticker.tick();
        }
        assert_eq!(ticker.index(), 1);
        assert_eq!(ticker.current(), Some("two"));
    }

    #[test]
    fn empty_list_never_advances() {
        let mut ticker = RotatingTicker::new(&[]);
        assert_eq!(ticker.tick(), 0);
        assert_eq!(ticker.current(), None);
        assert!(ticker.is_empty());
    }

    #[test]
    fn rotation_period_is_two_and_a_half_seconds() {
        assert_eq!(period_millis(ROLE_ROTATION_PERIOD), 2_500);
    }
}
