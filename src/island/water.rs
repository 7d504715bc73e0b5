//! The water meter.

/// One step of the water meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterLevel {
    /// Flood cards drawn each turn at this level.
    pub draw_count: usize,
    /// Difficulty name for the selectable starting levels.
    pub name: Option<&'static str>,
    /// Whether reaching this level ends the game.
    pub is_death: bool,
}

impl WaterLevel {
    const fn step(draw_count: usize) -> Self {
        Self {
            draw_count,
            name: None,
            is_death: false,
        }
    }

    const fn named(draw_count: usize, name: &'static str) -> Self {
        Self {
            draw_count,
            name: Some(name),
            is_death: false,
        }
    }
}

/// The water meter, from Novice to Death.
pub const WATER_LEVELS: [WaterLevel; 10] = [
    WaterLevel::named(2, "Novice"),
    WaterLevel::named(2, "Normal"),
    WaterLevel::named(3, "Elite"),
    WaterLevel::named(3, "Legendary"),
    WaterLevel::step(3),
    WaterLevel::step(4),
    WaterLevel::step(4),
    WaterLevel::step(5),
    WaterLevel::step(5),
    WaterLevel {
        draw_count: 0,
        name: Some("Death"),
        is_death: true,
    },
];

/// Levels a game may start on.
pub const STARTING_LEVELS: usize = 4;

/// Tracks the current water level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterMeter {
    index: usize,
}

impl WaterMeter {
    /// Creates a meter at `index`. Indices past the end clamp to Death.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        let last = WATER_LEVELS.len() - 1;
        Self {
            index: if index > last { last } else { index },
        }
    }

    /// Returns the current step index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the current level.
    #[must_use]
    pub const fn level(&self) -> WaterLevel {
        WATER_LEVELS[self.index]
    }

    /// Flood cards drawn each turn at the current level.
    #[must_use]
    pub const fn draw_count(&self) -> usize {
        self.level().draw_count
    }

    /// Returns whether the meter sits on the Death step.
    #[must_use]
    pub const fn is_death_level(&self) -> bool {
        self.level().is_death
    }

    /// Raises the water one step and returns the new level.
    ///
    /// Callers check [`WaterMeter::is_death_level`] first; at Death the meter
    /// does not move.
    pub const fn waters_rise(&mut self) -> WaterLevel {
        debug_assert!(!self.is_death_level(), "waters rose past Death");
        if self.index + 1 < WATER_LEVELS.len() {
            self.index += 1;
        }
        self.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_rises_from_novice_reach_death() {
        let mut meter = WaterMeter::new(0);
        assert_eq!(meter.level().name, Some("Novice"));
        for _ in 0..8 {
            meter.waters_rise();
            assert!(!meter.is_death_level());
        }
        let level = meter.waters_rise();
        assert!(level.is_death);
        assert!(meter.is_death_level());
        assert_eq!(meter.index(), 9);
    }

    #[test]
    fn draw_counts_climb() {
        let mut meter = WaterMeter::new(1);
        assert_eq!(meter.draw_count(), 2);
        meter.waters_rise();
        assert_eq!(meter.draw_count(), 3);
    }

    #[test]
    fn new_clamps_to_death() {
        assert!(WaterMeter::new(42).is_death_level());
    }
}
