use crate::dynamics::BodyHandle;

/// Directed pair: `responder`'s reaction to `partner`.
///
/// The world keeps one of these per reaction already issued on the
/// responder's behalf during the current tick (a deferred flip, or a
/// resolution run for it because its partner vanished). The responder's
/// own pass skips such partners so a contact is never answered twice.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    pub responder: BodyHandle,
    pub partner: BodyHandle,
}

impl PairKey {
    #[inline]
    pub const fn new(responder: BodyHandle, partner: BodyHandle) -> Self {
        Self { responder, partner }
    }
}
