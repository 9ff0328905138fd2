use chrono::NaiveDate;

/// Per-lane bookkeeping for one assignment pass: position = lane index,
/// value = end date of the last event placed in that lane
#[derive(Debug)]
pub(crate) struct LaneTracks {
    ends: Vec<Option<NaiveDate>>,
}

impl LaneTracks {
    pub(crate) fn new() -> Self {
        Self { ends: Vec::new() }
    }

    /// Places a span on the first lane whose last end date is strictly before
    /// `start` (an event ending the day another starts still blocks the
    /// lane), appending a new lane when none is free
    pub(crate) fn place(&mut self, start: NaiveDate, end: NaiveDate) -> usize {
        let lane = match self
            .ends
            .iter()
            .position(|last| last.map_or(true, |d| d < start))
        {
            Some(free) => free,
            None => {
                self.ends.push(None);
                self.ends.len() - 1
            }
        };
        self.ends[lane] = Some(end);
        lane
    }

    pub(crate) fn lane_count(&self) -> usize {
        self.ends.len()
    }
}

/// First-fit greedy pass shared by the global and weekly assigners; spans
/// must already be sorted by (start, end). Returns each span's lane plus the
/// number of lanes used
pub(crate) fn assign_first_fit(spans: &[(NaiveDate, NaiveDate)]) -> (Vec<usize>, usize) {
    let mut tracks = LaneTracks::new();
    let lanes = spans
        .iter()
        .map(|&(start, end)| tracks.place(start, end))
        .collect();
    (lanes, tracks.lane_count())
}
