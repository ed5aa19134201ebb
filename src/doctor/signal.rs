/// Number of bars in the signal strength indicator
pub const SIGNAL_BARS: usize = 4;

/// Coarse colour bucket for a signal reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTone {
    Strong,
    Moderate,
    Weak,
}

impl SignalTone {
    pub fn of(strength: u8) -> Self {
        match strength.min(100) {
            70.. => SignalTone::Strong,
            40.. => SignalTone::Moderate,
            _ => SignalTone::Weak,
        }
    }
}

/// Link quality shown for the connected network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl LinkQuality {
    pub fn of(strength: u8) -> Self {
        match strength.min(100) {
            80.. => LinkQuality::Excellent,
            60.. => LinkQuality::Good,
            40.. => LinkQuality::Fair,
            _ => LinkQuality::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkQuality::Excellent => "Excellent",
            LinkQuality::Good => "Good",
            LinkQuality::Fair => "Fair",
            LinkQuality::Poor => "Poor",
        }
    }

    pub fn tone(&self) -> SignalTone {
        match self {
            LinkQuality::Excellent => SignalTone::Strong,
            LinkQuality::Good | LinkQuality::Fair => SignalTone::Moderate,
            LinkQuality::Poor => SignalTone::Weak,
        }
    }
}

/// Coverage verdict for a spot in the house during a survey
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageQuality {
    Excellent,
    Good,
    Poor,
    DeadZone,
}

impl CoverageQuality {
    pub fn of(strength: u8) -> Self {
        match strength.min(100) {
            70.. => CoverageQuality::Excellent,
            40.. => CoverageQuality::Good,
            20.. => CoverageQuality::Poor,
            _ => CoverageQuality::DeadZone,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoverageQuality::Excellent => "Excellent",
            CoverageQuality::Good => "Good",
            CoverageQuality::Poor => "Poor",
            CoverageQuality::DeadZone => "Dead Zone",
        }
    }
}

/// Lit state of each bar, `None` for an unlit bar.
///
/// Bar `i` lights up once the strength reaches `(i + 1) * 25`; every lit bar
/// shares one tone derived from the overall strength.
pub fn signal_bars(strength: u8) -> [Option<SignalTone>; SIGNAL_BARS] {
    let strength = strength.min(100);
    let tone = match strength {
        75.. => SignalTone::Strong,
        50.. => SignalTone::Moderate,
        _ => SignalTone::Weak,
    };
    let mut bars = [None; SIGNAL_BARS];
    for (i, bar) in bars.iter_mut().enumerate() {
        if usize::from(strength) >= (i + 1) * 25 {
            *bar = Some(tone);
        }
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_quality_thresholds() {
        assert_eq!(LinkQuality::of(85), LinkQuality::Excellent);
        assert_eq!(LinkQuality::of(80), LinkQuality::Excellent);
        assert_eq!(LinkQuality::of(79), LinkQuality::Good);
        assert_eq!(LinkQuality::of(40), LinkQuality::Fair);
        assert_eq!(LinkQuality::of(39), LinkQuality::Poor);
        assert_eq!(LinkQuality::of(200), LinkQuality::Excellent);
    }

    #[test]
    fn coverage_quality_flags_dead_zones() {
        assert_eq!(CoverageQuality::of(72).label(), "Excellent");
        assert_eq!(CoverageQuality::of(45).label(), "Good");
        assert_eq!(CoverageQuality::of(28).label(), "Poor");
        assert_eq!(CoverageQuality::of(15).label(), "Dead Zone");
        assert_eq!(CoverageQuality::of(19), CoverageQuality::DeadZone);
        assert_eq!(CoverageQuality::of(20), CoverageQuality::Poor);
    }

    #[test]
    fn tone_buckets() {
        assert_eq!(SignalTone::of(70), SignalTone::Strong);
        assert_eq!(SignalTone::of(69), SignalTone::Moderate);
        assert_eq!(SignalTone::of(39), SignalTone::Weak);
    }

    #[test]
    fn bars_light_up_in_quarters() {
        assert_eq!(signal_bars(0), [None; 4]);
        assert_eq!(signal_bars(24), [None; 4]);
        assert_eq!(
            signal_bars(32),
            [Some(SignalTone::Weak), None, None, None]
        );
        assert_eq!(
            signal_bars(60),
            [Some(SignalTone::Moderate), Some(SignalTone::Moderate), None, None]
        );
        let strong = Some(SignalTone::Strong);
        assert_eq!(signal_bars(85), [strong, strong, strong, None]);
        assert!(signal_bars(100).iter().all(|b| *b == Some(SignalTone::Strong)));
    }
}
