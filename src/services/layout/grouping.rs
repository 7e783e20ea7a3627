//! Overlap grouping for concurrent events.
//!
//! Events that fight for the same horizontal space in a day column are
//! collected into groups; the placement pass later splits the column width
//! evenly among a group's members.

use crate::models::event::Event;

/// An ordered run of events chained together by pairwise overlap.
///
/// Membership is decided by comparing each candidate against the group's
/// *last* member only, not against every member. A group can therefore
/// contain events whose first and last members are disjoint, as long as
/// each consecutive pair along the chain overlaps. Width splitting relies
/// on membership as computed by this rule, so it must not be tightened
/// into full pairwise-clique detection.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapGroup {
    events: Vec<Event>,
}

impl OverlapGroup {
    /// Members in sort-by-start order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of members; never zero by construction.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 0-based slot index of an event within this group, if it is a member.
    pub fn position_of(&self, event: &Event) -> Option<usize> {
        self.events.iter().position(|e| e == event)
    }
}

/// Partition events into chained overlap groups.
///
/// Sorts a working copy by start time (stable, so ties keep input order)
/// and scans once: an event joins the current group when the group is
/// empty or when it overlaps the group's last member; otherwise the
/// current group closes and a new one starts. Every input event lands in
/// exactly one group. The input slice is left untouched.
pub fn group_events(events: &[Event]) -> Vec<OverlapGroup> {
    let mut sorted: Vec<Event> = events.to_vec();
    sorted.sort_by_key(|event| event.start);

    let mut groups: Vec<OverlapGroup> = Vec::new();
    let mut current: Vec<Event> = Vec::new();

    for event in sorted {
        // Chain test looks at the last member only, by design
        let chained = current.last().map_or(true, |last| event.overlaps(last));
        if !chained {
            groups.push(OverlapGroup {
                events: std::mem::take(&mut current),
            });
        }
        current.push(event);
    }

    if !current.is_empty() {
        groups.push(OverlapGroup { events: current });
    }

    log::debug!(
        "Grouped {} events into {} overlap groups",
        events.len(),
        groups.len()
    );

    groups
}
