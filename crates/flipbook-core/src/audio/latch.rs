use tracing::debug;

/// Whether the environment is believed to allow playback without a gesture.
///
/// A gesture flips the latch to `Unlocked` straight away; a rejected start
/// puts it back to `Locked` so the next gesture tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionLatch {
    #[default]
    Locked,
    Unlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchEvent {
    Gesture,
    StartAccepted,
    StartRejected,
}

impl PermissionLatch {
    pub fn is_unlocked(self) -> bool {
        matches!(self, PermissionLatch::Unlocked)
    }

    /// Returns `true` when the event is a gesture that should attempt the unlock.
    pub fn transition(&mut self, event: LatchEvent) -> bool {
        let before = *self;
        let attempt = match (before, event) {
            (PermissionLatch::Locked, LatchEvent::Gesture) => {
                *self = PermissionLatch::Unlocked;
                true
            }
            (PermissionLatch::Unlocked, LatchEvent::Gesture) => false,
            (_, LatchEvent::StartAccepted) => {
                *self = PermissionLatch::Unlocked;
                false
            }
            (_, LatchEvent::StartRejected) => {
                *self = PermissionLatch::Locked;
                false
            }
        };
        if before != *self {
            debug!(?before, after = ?*self, ?event, "Permission latch changed");
        }
        attempt
    }
}
