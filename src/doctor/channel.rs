use crate::config;
use std::collections::BTreeMap;

/// Non-overlapping 2.4GHz channels, in preference order
pub const PREFERRED_CHANNELS: [u32; 3] = [1, 6, 11];

/// How crowded a channel is in the usage chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Congestion {
    Free,
    Moderate,
    Congested,
}

impl Congestion {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Congestion::Free,
            1..=2 => Congestion::Moderate,
            _ => Congestion::Congested,
        }
    }
}

/// One bar of the channel usage chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLoad {
    pub channel: u32,
    pub networks: usize,
    pub congestion: Congestion,
    pub is_recommended: bool,
}

/// Pick a channel to move the router to.
///
/// Returns the first of 1, 6, 11 nobody is using. When all three are taken,
/// returns the least used observed channel; ties go to the lowest channel
/// number. An empty observation yields channel 1.
pub fn recommend_channel(observed: &[u32]) -> u32 {
    if let Some(free) = PREFERRED_CHANNELS
        .iter()
        .find(|candidate| !observed.contains(candidate))
    {
        return *free;
    }

    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for channel in observed {
        *counts.entry(*channel).or_insert(0) += 1;
    }

    // BTreeMap iterates in ascending channel order and min_by_key keeps the
    // first minimum, which gives the lowest channel among ties.
    counts
        .into_iter()
        .min_by_key(|(_, count)| *count)
        .map(|(channel, _)| channel)
        .unwrap_or(PREFERRED_CHANNELS[0])
}

/// Per-channel occupancy for the 2.4GHz chart
pub fn channel_usage(observed: &[u32], recommended: u32) -> Vec<ChannelLoad> {
    config::CHART_CHANNELS
        .map(|channel| {
            let networks = observed.iter().filter(|c| **c == channel).count();
            ChannelLoad {
                channel,
                networks,
                congestion: Congestion::from_count(networks),
                is_recommended: channel == recommended,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scan_recommends_channel_one() {
        assert_eq!(recommend_channel(&[]), 1);
    }

    #[test]
    fn first_unused_preferred_channel_wins() {
        assert_eq!(recommend_channel(&[6, 11]), 1);
        assert_eq!(recommend_channel(&[1, 11]), 6);
        assert_eq!(recommend_channel(&[1, 6, 36]), 11);
    }

    #[test]
    fn all_preferred_taken_once_picks_lowest() {
        assert_eq!(recommend_channel(&[1, 6, 11]), 1);
    }

    #[test]
    fn least_used_channel_wins_when_preferred_are_taken() {
        assert_eq!(recommend_channel(&[1, 1, 6, 11]), 6);
        assert_eq!(recommend_channel(&[1, 1, 6, 6, 11]), 11);
    }

    #[test]
    fn ties_are_numeric_not_lexical() {
        // Lexically "11" sorts before "2"; numerically 2 must win.
        assert_eq!(recommend_channel(&[1, 1, 6, 6, 11, 2]), 2);
        assert_eq!(recommend_channel(&[11, 2, 1, 1, 6, 6]), 2);
    }

    #[test]
    fn non_2_4ghz_channels_count_as_observed() {
        assert_eq!(recommend_channel(&[1, 1, 6, 6, 11, 11, 36]), 36);
    }

    #[test]
    fn result_does_not_depend_on_order() {
        let inputs = [
            vec![1, 1, 6, 11, 11, 6, 3],
            vec![3, 6, 11, 1, 6, 11, 1],
            vec![11, 11, 6, 6, 3, 1, 1],
        ];
        let results: Vec<u32> = inputs.iter().map(|i| recommend_channel(i)).collect();
        assert!(results.iter().all(|r| *r == 3), "{results:?}");
    }

    #[test]
    fn usage_covers_channels_one_through_eleven() {
        let usage = channel_usage(&[1, 6, 6, 6, 11, 36], 1);
        assert_eq!(usage.len(), 11);
        assert_eq!(usage[0].channel, 1);
        assert_eq!(usage[10].channel, 11);

        assert_eq!(usage[0].congestion, Congestion::Moderate);
        assert!(usage[0].is_recommended);
        assert_eq!(usage[5].networks, 3);
        assert_eq!(usage[5].congestion, Congestion::Congested);
        assert_eq!(usage[1].congestion, Congestion::Free);
        assert_eq!(usage.iter().map(|l| l.networks).sum::<usize>(), 5);
    }
}
