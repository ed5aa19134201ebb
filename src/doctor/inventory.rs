use crate::doctor::types::ConnectedDevice;
use tracing::info;

/// Devices on the network for the current session.
///
/// Changes live only in memory and are lost on exit.
#[derive(Debug, Clone, Default)]
pub struct DeviceInventory {
    devices: Vec<ConnectedDevice>,
}

impl DeviceInventory {
    pub fn new(devices: Vec<ConnectedDevice>) -> Self {
        Self { devices }
    }

    pub fn devices(&self) -> &[ConnectedDevice] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ConnectedDevice> {
        self.devices.get(index)
    }

    pub fn unknown_count(&self) -> usize {
        self.devices.iter().filter(|d| d.is_unknown).count()
    }

    /// Combined usage in Mbps
    pub fn total_bandwidth(&self) -> f64 {
        self.devices.iter().map(|d| d.bandwidth_usage).sum()
    }

    /// Fraction (0.0..=1.0) of the total usage taken by `device`
    pub fn bandwidth_share(&self, device: &ConnectedDevice) -> f64 {
        let total = self.total_bandwidth();
        if total <= 0.0 {
            0.0
        } else {
            (device.bandwidth_usage / total).clamp(0.0, 1.0)
        }
    }

    /// Kick a device off the network, returning it if it was present
    pub fn block(&mut self, id: &str) -> Option<ConnectedDevice> {
        let pos = self.devices.iter().position(|d| d.id == id)?;
        let device = self.devices.remove(pos);
        info!(id, name = %device.name, "device blocked");
        Some(device)
    }

    /// Accept an unknown device, giving it a placeholder name.
    ///
    /// Returns false when no device has that id.
    pub fn mark_known(&mut self, id: &str) -> bool {
        match self.devices.iter_mut().find(|d| d.id == id) {
            Some(device) => {
                device.is_unknown = false;
                device.name = format!("Device {id}");
                info!(id, "device marked as known");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctor::catalog;

    fn inventory() -> DeviceInventory {
        DeviceInventory::new(catalog::connected_devices())
    }

    #[test]
    fn totals_match_the_sample() {
        let inv = inventory();
        assert_eq!(inv.len(), 4);
        assert_eq!(inv.unknown_count(), 1);
        assert!((inv.total_bandwidth() - 94.8).abs() < 1e-9);
    }

    #[test]
    fn block_removes_only_the_target() {
        let mut inv = inventory();
        let removed = inv.block("4").unwrap();
        assert_eq!(removed.name, "Unknown Device");
        assert_eq!(inv.len(), 3);
        assert_eq!(inv.unknown_count(), 0);
        assert!(inv.block("4").is_none());
    }

    #[test]
    fn mark_known_renames_and_clears_flag() {
        let mut inv = inventory();
        assert!(inv.mark_known("4"));
        let device = inv.devices().iter().find(|d| d.id == "4").unwrap();
        assert!(!device.is_unknown);
        assert_eq!(device.name, "Device 4");
        assert_eq!(inv.unknown_count(), 0);
        assert!(!inv.mark_known("missing"));
    }

    #[test]
    fn shares_sum_to_one() {
        let inv = inventory();
        let sum: f64 = inv.devices().iter().map(|d| inv.bandwidth_share(d)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_inventory_has_no_share() {
        let mut inv = inventory();
        let laptop = inv.get(1).cloned().unwrap();
        for id in ["1", "2", "3", "4"] {
            inv.block(id);
        }
        assert!(inv.is_empty());
        assert_eq!(inv.bandwidth_share(&laptop), 0.0);
    }
}
