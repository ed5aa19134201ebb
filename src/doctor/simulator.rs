//! Timer-driven stand-ins for real measurements.
//!
//! Every simulation runs as a tokio task that sleeps and then reports a
//! fabricated result over a bounded channel. The event loop drains those
//! channels with `try_recv` so drawing never blocks.

use crate::config;
use crate::doctor::catalog;
use crate::doctor::types::{SpeedTestResult, SurveyReading, WifiNetwork};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::time::Duration;
use tokio::sync::mpsc::{self, Receiver};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Source of fake signal readings and measurement noise
#[derive(Debug)]
pub struct SignalSampler {
    rng: StdRng,
}

impl SignalSampler {
    /// A fixed seed makes a whole session reproducible
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Independent sampler for a background task
    pub fn fork(&mut self) -> Self {
        Self {
            rng: StdRng::seed_from_u64(self.rng.next_u64()),
        }
    }

    /// Signal strength in 0..100
    pub fn sample(&mut self) -> u8 {
        self.rng.gen_range(0..100)
    }

    /// A new speed result scattered around `baseline`
    pub fn jitter_speed(&mut self, baseline: &SpeedTestResult) -> SpeedTestResult {
        let spread = config::SPEED_JITTER_RATIO;
        let download = baseline.download_mbps * self.rng.gen_range(1.0 - spread..=1.0 + spread);
        let upload = baseline.upload_mbps * self.rng.gen_range(1.0 - spread..=1.0 + spread);
        let ping_delta = self
            .rng
            .gen_range(-config::PING_JITTER_MS..=config::PING_JITTER_MS);
        let ping = (i64::from(baseline.ping_ms) + ping_delta).max(1);

        SpeedTestResult {
            download_mbps: round_tenths(download),
            upload_mbps: round_tenths(upload),
            ping_ms: u32::try_from(ping).unwrap_or(1),
            timestamp: Utc::now(),
        }
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Completes once `delay` has passed. Used for the spinners that only
/// pretend to do work.
pub fn start_timer(delay: Duration) -> Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(()).await;
    });
    rx
}

/// Pretend to scan the air and report the nearby networks
pub fn start_network_scan(delay: Duration) -> Receiver<Vec<WifiNetwork>> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let networks = catalog::nearby_networks();
        info!(count = networks.len(), "network scan finished");
        let _ = tx.send(networks).await;
    });
    rx
}

pub fn start_speed_test(
    delay: Duration,
    baseline: SpeedTestResult,
    mut sampler: SignalSampler,
) -> Receiver<SpeedTestResult> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let result = sampler.jitter_speed(&baseline);
        info!(
            download = result.download_mbps,
            upload = result.upload_mbps,
            ping = result.ping_ms,
            "speed test finished"
        );
        let _ = tx.send(result).await;
    });
    rx
}

/// Progress of a running dead-zone survey
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyEvent {
    /// Fresh reading for the live signal gauge
    Reading(u8),
    /// Survey completed with one reading per room
    Finished(Vec<SurveyReading>),
}

/// Running survey. `stop` aborts the timers.
#[derive(Debug)]
pub struct SurveyHandle {
    pub events: Receiver<SurveyEvent>,
    task: JoinHandle<()>,
}

impl SurveyHandle {
    /// Tear the timers down. Readings already queued can still be drained.
    pub fn stop(&mut self) {
        self.task.abort();
        info!("dead-zone survey stopped");
    }
}

/// Walk-around survey: a live reading every `tick`, results after `duration`
pub fn start_survey(duration: Duration, tick: Duration, mut sampler: SignalSampler) -> SurveyHandle {
    let (tx, rx) = mpsc::channel(config::SURVEY_CHANNEL_CAPACITY);
    let task = tokio::spawn(async move {
        let start = tokio::time::Instant::now();
        let mut ticker = tokio::time::interval_at(start + tick, tick);
        let deadline = tokio::time::sleep_until(start + duration);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                _ = &mut deadline => {
                    let readings = catalog::survey_readings();
                    info!(rooms = readings.len(), "dead-zone survey finished");
                    let _ = tx.send(SurveyEvent::Finished(readings)).await;
                    break;
                }
                _ = ticker.tick() => {
                    let reading = sampler.sample();
                    debug!(reading, "survey tick");
                    if tx.send(SurveyEvent::Reading(reading)).await.is_err() {
                        break;
                    }
                }
            }
        }
    });
    info!(?duration, "dead-zone survey started");
    SurveyHandle { events: rx, task }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_samplers_repeat() {
        let mut a = SignalSampler::new(Some(7));
        let mut b = SignalSampler::new(Some(7));
        let left: Vec<u8> = (0..20).map(|_| a.sample()).collect();
        let right: Vec<u8> = (0..20).map(|_| b.sample()).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|s| *s < 100));
    }

    #[test]
    fn speed_jitter_stays_near_baseline() {
        let baseline = catalog::speed_test_result();
        let mut sampler = SignalSampler::new(Some(42));
        for _ in 0..50 {
            let r = sampler.jitter_speed(&baseline);
            assert!(r.download_mbps >= 76.8 && r.download_mbps <= 94.0, "{r:?}");
            assert!(r.upload_mbps >= 11.0 && r.upload_mbps <= 13.6, "{r:?}");
            assert!(r.ping_ms >= 10 && r.ping_ms <= 20, "{r:?}");
        }
    }

    #[test]
    fn ping_never_drops_to_zero() {
        let baseline = SpeedTestResult {
            ping_ms: 1,
            ..catalog::speed_test_result()
        };
        let mut sampler = SignalSampler::new(Some(3));
        for _ in 0..50 {
            assert!(sampler.jitter_speed(&baseline).ping_ms >= 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn network_scan_reports_after_delay() {
        let mut rx = start_network_scan(Duration::from_millis(config::SCAN_REFRESH_MS));
        tokio::time::sleep(Duration::from_millis(config::SCAN_REFRESH_MS - 1)).await;
        assert!(rx.try_recv().is_err());

        let networks = rx.recv().await.unwrap();
        assert_eq!(networks, catalog::nearby_networks());
    }

    #[tokio::test(start_paused = true)]
    async fn timer_fires_once() {
        let mut rx = start_timer(Duration::from_secs(2));
        assert_eq!(rx.recv().await, Some(()));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn survey_ticks_then_finishes() {
        let mut handle = start_survey(
            Duration::from_millis(config::SURVEY_DURATION_MS),
            Duration::from_millis(config::SURVEY_TICK_MS),
            SignalSampler::new(Some(1)),
        );

        let mut readings = 0;
        let finished = loop {
            match handle.events.recv().await {
                Some(SurveyEvent::Reading(value)) => {
                    assert!(value < 100);
                    readings += 1;
                }
                Some(SurveyEvent::Finished(rooms)) => break rooms,
                None => panic!("survey ended without results"),
            }
        };

        // Ticks at 1.5s intervals inside a 10s survey
        assert_eq!(readings, 6);
        assert_eq!(finished, catalog::survey_readings());
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_survey_never_reports_results() {
        let mut handle = start_survey(
            Duration::from_millis(config::SURVEY_DURATION_MS),
            Duration::from_millis(config::SURVEY_TICK_MS),
            SignalSampler::new(Some(1)),
        );
        tokio::time::sleep(Duration::from_millis(2_000)).await;
        assert!(matches!(
            handle.events.recv().await,
            Some(SurveyEvent::Reading(_))
        ));

        handle.stop();
        tokio::time::sleep(Duration::from_millis(config::SURVEY_DURATION_MS)).await;
        assert!(handle.task.is_finished());
        while let Some(event) = handle.events.recv().await {
            assert!(matches!(event, SurveyEvent::Reading(_)), "{event:?}");
        }
    }
}
