use crate::util::record::GcPhase;
use crate::vm::VMBinding;
use strum_macros::{Display, EnumIter};

/// A GC lifecycle event reported by the runtime.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum GcEvent {
    /// A collection cycle started.
    CycleStart,
    /// Marking finished.
    MarkEnd,
    /// Sweeping finished.
    SweepEnd,
    /// The collector was entered. Only reported if [`VMBinding::SUPPORTS_ENTER_EXIT`].
    CycleEnter,
    /// The collector was left. Only reported if [`VMBinding::SUPPORTS_ENTER_EXIT`].
    CycleExit,
}

impl GcEvent {
    /// The phase a record taken at this event is tagged with.
    pub fn phase(self) -> GcPhase {
        match self {
            GcEvent::CycleStart => GcPhase::CycleStarted,
            GcEvent::MarkEnd => GcPhase::MarkEnded,
            GcEvent::SweepEnd => GcPhase::SweepEnded,
            GcEvent::CycleEnter => GcPhase::CycleEntered,
            GcEvent::CycleExit => GcPhase::CycleExited,
        }
    }

    /// The event that completes a cycle on a runtime of the given binding.
    pub fn terminal<VM: VMBinding>() -> GcEvent {
        if VM::SUPPORTS_ENTER_EXIT {
            GcEvent::CycleExit
        } else {
            GcEvent::SweepEnd
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl From<GcEvent> for GcPhase {
    fn from(event: GcEvent) -> Self {
        event.phase()
    }
}

/// A set of GC events, used to tell the runtime which events a tracepoint subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct GcEventSet(u8);

impl GcEventSet {
    /// No events.
    pub const EMPTY: Self = GcEventSet(0);
    /// Start, end of marking and end of sweeping.
    pub const BASIC: Self = GcEventSet(
        GcEvent::CycleStart.bit() | GcEvent::MarkEnd.bit() | GcEvent::SweepEnd.bit(),
    );
    /// All events.
    pub const ALL: Self =
        GcEventSet(Self::BASIC.0 | GcEvent::CycleEnter.bit() | GcEvent::CycleExit.bit());

    /// The events the runtime of the given binding can report.
    pub fn for_binding<VM: VMBinding>() -> Self {
        if VM::SUPPORTS_ENTER_EXIT {
            Self::ALL
        } else {
            Self::BASIC
        }
    }

    /// Return this set with `event` added.
    pub const fn with(self, event: GcEvent) -> Self {
        GcEventSet(self.0 | event.bit())
    }

    /// Does the set contain `event`?
    pub const fn contains(self, event: GcEvent) -> bool {
        self.0 & event.bit() != 0
    }

    /// Is the set empty?
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the events in the set.
    pub fn iter(self) -> impl Iterator<Item = GcEvent> {
        use strum::IntoEnumIterator;
        GcEvent::iter().filter(move |e| self.contains(*e))
    }
}

impl FromIterator<GcEvent> for GcEventSet {
    fn from_iter<I: IntoIterator<Item = GcEvent>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, GcEventSet::with)
    }
}
