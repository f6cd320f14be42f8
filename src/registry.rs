//! Sensor registry: a table of heterogeneous sensors with one uniform
//! acquisition contract.
//!
//! The registry is shared between the slow acquisition task and anything
//! that wants to read current values (display, publishing). Access goes
//! through a bounded-wait claim: a task that cannot take the claim skips
//! its whole cycle and tries again next time, it never blocks. Acquisition
//! and snapshotting each take the claim exactly once, so claims never nest.

use core::cell::{Cell, UnsafeCell};
use core::fmt;

use critical_section::Mutex;
use heapless::{String, Vec};

use crate::{log_info, log_warn};

/// Capacity of string-valued sensor slots.
pub const TEXT_CAPACITY: usize = 32;

/// Claim attempts before a cycle is skipped.
const CLAIM_ATTEMPTS: usize = 16;

/// A typed sensor data slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorValue {
    Int(i32),
    Float(f32),
    Bool(bool),
    Text(String<TEXT_CAPACITY>),
    Undefined,
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
            Self::Undefined => write!(f, "<undefined>"),
        }
    }
}

/// Error returned when a sensor read fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquireError;

/// Error returned when the registry claim could not be taken within the
/// bounded wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentionError;

/// Error returned when the registry has no room for another descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// No free descriptor slot.
    Full,
    /// The claim could not be taken within the bounded wait.
    Contended,
}

/// Uniform acquisition contract for concrete sensor drivers.
///
/// A driver reads its hardware and writes the result into the slot. Bus
/// handles and other driver state live behind the implementation; the
/// registry only sees this trait.
pub trait Sensor: Sync {
    /// Read the sensor and store the result in `slot`.
    fn acquire(&self, slot: &mut SensorValue) -> Result<(), AcquireError>;
}

/// One registry entry: acquisition capability, data slot and metadata.
///
/// A descriptor with no capability is the sentinel that terminates the
/// table.
#[derive(Clone)]
pub struct SensorDescriptor {
    capability: Option<&'static dyn Sensor>,
    value: SensorValue,
    label: &'static str,
    topic: &'static str,
    slow_acq: bool,
    publish: bool,
    display: bool,
    valid: bool,
}

impl SensorDescriptor {
    /// Create a descriptor for `sensor`.
    ///
    /// Defaults: acquired on the slow loop, not published, not displayed.
    pub const fn new(
        sensor: &'static dyn Sensor,
        label: &'static str,
        topic: &'static str,
    ) -> Self {
        Self {
            capability: Some(sensor),
            value: SensorValue::Undefined,
            label,
            topic,
            slow_acq: true,
            publish: false,
            display: false,
            valid: false,
        }
    }

    /// The terminating table entry.
    pub const fn sentinel() -> Self {
        Self {
            capability: None,
            value: SensorValue::Undefined,
            label: "end of sensors",
            topic: "",
            slow_acq: false,
            publish: false,
            display: false,
            valid: false,
        }
    }

    #[must_use]
    pub const fn with_publish(mut self) -> Self {
        self.publish = true;
        self
    }

    #[must_use]
    pub const fn with_display(mut self) -> Self {
        self.display = true;
        self
    }

    #[must_use]
    pub const fn with_slow_acq(mut self, slow_acq: bool) -> Self {
        self.slow_acq = slow_acq;
        self
    }

    pub const fn label(&self) -> &'static str {
        self.label
    }

    pub const fn topic(&self) -> &'static str {
        self.topic
    }

    pub const fn value(&self) -> &SensorValue {
        &self.value
    }

    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    pub const fn is_sentinel(&self) -> bool {
        self.capability.is_none()
    }

    pub const fn slow_acq(&self) -> bool {
        self.slow_acq
    }

    pub const fn publish(&self) -> bool {
        self.publish
    }

    pub const fn display(&self) -> bool {
        self.display
    }

    fn reading(&self) -> SensorReading {
        SensorReading {
            label: self.label,
            topic: self.topic,
            value: self.value.clone(),
            valid: self.valid,
            publish: self.publish,
            display: self.display,
        }
    }
}

impl fmt::Debug for SensorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensorDescriptor")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("valid", &self.valid)
            .finish_non_exhaustive()
    }
}

/// A copied-out view of one descriptor, as produced by
/// [`SensorRegistry::display_snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub label: &'static str,
    pub topic: &'static str,
    pub value: SensorValue,
    pub valid: bool,
    pub publish: bool,
    pub display: bool,
}

/// Ordered sensor table behind a bounded-wait claim.
///
/// `CAP` is the table capacity including the terminating sentinel.
/// Construct as a `static` and register sensors at startup, before the
/// acquisition and display tasks run.
pub struct SensorRegistry<const CAP: usize> {
    claimed: Mutex<Cell<bool>>,
    slots: UnsafeCell<Vec<SensorDescriptor, CAP>>,
}

// SAFETY: the descriptor table is only reachable through a `RegistryClaim`,
// and the claim flag hands out at most one claim at a time.
unsafe impl<const CAP: usize> Sync for SensorRegistry<CAP> {}

impl<const CAP: usize> SensorRegistry<CAP> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            claimed: Mutex::new(Cell::new(false)),
            slots: UnsafeCell::new(Vec::new()),
        }
    }

    /// Add a descriptor in front of the terminating sentinel.
    pub fn register(&self, descriptor: SensorDescriptor) -> Result<(), RegistryError> {
        let mut claim = self.claim().map_err(|_| RegistryError::Contended)?;
        let slots = claim.slots_mut();

        if slots.is_empty() {
            if CAP < 2 {
                return Err(RegistryError::Full);
            }
            // Checked above: room for the descriptor and the sentinel.
            let _ = slots.push(descriptor);
            let _ = slots.push(SensorDescriptor::sentinel());
            return Ok(());
        }

        if slots.is_full() {
            return Err(RegistryError::Full);
        }
        let sentinel_at = slots.len() - 1;
        slots[sentinel_at] = descriptor;
        let _ = slots.push(SensorDescriptor::sentinel());
        Ok(())
    }

    /// Take the registry claim with a bounded wait.
    ///
    /// Returns `Err(ContentionError)` when another task holds the claim for
    /// the whole wait; the caller is expected to skip its cycle and retry
    /// next time.
    pub fn claim(&self) -> Result<RegistryClaim<'_, CAP>, ContentionError> {
        for _ in 0..CLAIM_ATTEMPTS {
            if self.try_claim_once() {
                return Ok(RegistryClaim { registry: self });
            }
            core::hint::spin_loop();
        }
        Err(ContentionError)
    }

    fn try_claim_once(&self) -> bool {
        critical_section::with(|cs| {
            let flag = self.claimed.borrow(cs);
            if flag.get() {
                false
            } else {
                flag.set(true);
                true
            }
        })
    }

    fn release(&self) {
        critical_section::with(|cs| self.claimed.borrow(cs).set(false));
    }

    /// Run one acquisition cycle over every slow-loop descriptor.
    ///
    /// Per-sensor failures are recorded in the validity flag and do not
    /// stop the cycle. If the claim cannot be taken nothing is touched;
    /// the whole cycle is retried on the task's next pass.
    pub fn acquire_all(&self) -> Result<(), ContentionError> {
        let mut claim = self.claim().map_err(|err| {
            log_warn!("can't claim sensor registry, skipping acquisition cycle");
            err
        })?;

        for descriptor in claim.slots_mut().iter_mut() {
            let Some(sensor) = descriptor.capability else {
                break;
            };
            if !descriptor.slow_acq {
                continue;
            }
            descriptor.valid = sensor.acquire(&mut descriptor.value).is_ok();
            log_info!(
                "{} acquire {}",
                descriptor.label,
                if descriptor.valid { "success" } else { "fail" }
            );
        }
        Ok(())
    }

    /// Hand a formatted reading of every descriptor to `sink`.
    ///
    /// Read-only; values are copied out under the claim so the sink runs
    /// over a consistent cycle.
    pub fn display_snapshot<F: FnMut(&SensorReading)>(
        &self,
        mut sink: F,
    ) -> Result<(), ContentionError> {
        let claim = self.claim().map_err(|err| {
            log_warn!("can't claim sensor registry, skipping display cycle");
            err
        })?;

        for descriptor in claim.descriptors() {
            if descriptor.is_sentinel() {
                break;
            }
            let reading = descriptor.reading();
            log_info!("{} = {}", reading.label, reading.value);
            sink(&reading);
        }
        Ok(())
    }

    /// Hand a reading of every publishable descriptor to `sink`.
    ///
    /// Same single-claim discipline as [`Self::display_snapshot`]: values
    /// are copied out under the claim so a bus task publishes a consistent
    /// cycle. Descriptors without the publish flag are skipped.
    pub fn publish_snapshot<F: FnMut(&SensorReading)>(
        &self,
        mut sink: F,
    ) -> Result<(), ContentionError> {
        let claim = self.claim().map_err(|err| {
            log_warn!("can't claim sensor registry, skipping publish cycle");
            err
        })?;

        for descriptor in claim.descriptors() {
            if descriptor.is_sentinel() {
                break;
            }
            if !descriptor.publish {
                continue;
            }
            sink(&descriptor.reading());
        }
        Ok(())
    }

    /// Number of registered descriptors, sentinel excluded.
    pub fn len(&self) -> Result<usize, ContentionError> {
        let claim = self.claim()?;
        Ok(claim
            .descriptors()
            .iter()
            .take_while(|descriptor| !descriptor.is_sentinel())
            .count())
    }

    pub fn is_empty(&self) -> Result<bool, ContentionError> {
        Ok(self.len()? == 0)
    }
}

impl<const CAP: usize> Default for SensorRegistry<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive access to the descriptor table.
///
/// Dropping the claim releases the registry for the next task.
pub struct RegistryClaim<'a, const CAP: usize> {
    registry: &'a SensorRegistry<CAP>,
}

impl<const CAP: usize> RegistryClaim<'_, CAP> {
    /// Read-only view of the table, sentinel included.
    pub fn descriptors(&self) -> &[SensorDescriptor] {
        // SAFETY: the claim flag guarantees this is the only live claim,
        // so no mutable access to the table exists while `self` is borrowed.
        unsafe { &*self.registry.slots.get() }
    }

    fn slots_mut(&mut self) -> &mut Vec<SensorDescriptor, CAP> {
        // SAFETY: as above; `&mut self` additionally guarantees no shared
        // view handed out by this claim is alive.
        unsafe { &mut *self.registry.slots.get() }
    }
}

impl<const CAP: usize> Drop for RegistryClaim<'_, CAP> {
    fn drop(&mut self) {
        self.registry.release();
    }
}
