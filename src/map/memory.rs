use std::collections::HashMap;
use super::{GroupId, LineStyle, MapCanvas, OverlayId};
use crate::models::{Bounds, Coordinate};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnLine {
    pub id: OverlayId,
    pub points: Vec<Coordinate>,
    pub style: LineStyle,
    pub group: Option<GroupId>,
}

/// Canvas that keeps everything in memory, used outside the browser
///
/// Lines are stored bottom-to-top, so the last entry is the one rendered on top.
#[derive(Debug, Default)]
pub struct MemoryCanvas {
    lines: Vec<DrawnLine>,
    markers: Vec<(Coordinate, String)>,
    groups: HashMap<GroupId, Vec<OverlayId>>,
    viewport: Option<Bounds>,
    next_id: u64,
}

impl MemoryCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drawn lines, bottom-most first
    #[must_use]
    pub fn lines(&self) -> &[DrawnLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, id: OverlayId) -> Option<&DrawnLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn lines_in_group(&self, group: GroupId) -> impl Iterator<Item = &DrawnLine> {
        self.lines.iter().filter(move |line| line.group == Some(group))
    }

    /// Lines that belong to no group
    pub fn ungrouped_lines(&self) -> impl Iterator<Item = &DrawnLine> {
        self.lines.iter().filter(|line| line.group.is_none())
    }

    #[must_use]
    pub fn topmost(&self) -> Option<&DrawnLine> {
        self.lines.last()
    }

    #[must_use]
    pub fn markers(&self) -> &[(Coordinate, String)] {
        &self.markers
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Bounds> {
        self.viewport
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MapCanvas for MemoryCanvas {
    fn add_marker(&mut self, at: Coordinate, label: &str) {
        self.markers.push((at, label.to_string()));
    }

    fn add_line(&mut self, points: &[Coordinate], style: &LineStyle, group: Option<GroupId>) -> OverlayId {
        let id = OverlayId(self.allocate_id());
        if let Some(group) = group {
            self.groups.entry(group).or_default().push(id);
        }
        self.lines.push(DrawnLine { id, points: points.to_vec(), style: style.clone(), group });
        id
    }

    fn remove_line(&mut self, id: OverlayId) {
        self.lines.retain(|line| line.id != id);
        for members in self.groups.values_mut() {
            members.retain(|member| *member != id);
        }
    }

    fn bring_to_front(&mut self, id: OverlayId) {
        if let Some(index) = self.lines.iter().position(|line| line.id == id) {
            let line = self.lines.remove(index);
            self.lines.push(line);
        }
    }

    fn fit_to_line(&mut self, id: OverlayId) {
        if let Some(bounds) = self.line(id).and_then(|line| Bounds::enclosing(&line.points)) {
            self.viewport = Some(bounds);
        }
    }

    fn create_group(&mut self) -> GroupId {
        let id = GroupId(self.allocate_id());
        self.groups.insert(id, Vec::new());
        id
    }

    fn clear_group(&mut self, group: GroupId) {
        let Some(members) = self.groups.get_mut(&group) else { return };
        let removed = std::mem::take(members);
        self.lines.retain(|line| !removed.contains(&line.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CongestionLevel;

    fn points() -> Vec<Coordinate> {
        vec![Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 3.0)]
    }

    #[test]
    fn test_stacking_order() {
        let mut canvas = MemoryCanvas::new();
        let a = canvas.add_line(&points(), &LineStyle::route(), None);
        let b = canvas.add_line(&points(), &LineStyle::traffic(CongestionLevel::Low), None);
        assert_eq!(canvas.topmost().map(|l| l.id), Some(b));

        canvas.bring_to_front(a);
        assert_eq!(canvas.topmost().map(|l| l.id), Some(a));
    }

    #[test]
    fn test_clear_group_keeps_other_lines() {
        let mut canvas = MemoryCanvas::new();
        let group = canvas.create_group();
        let route = canvas.add_line(&points(), &LineStyle::route(), None);
        canvas.add_line(&points(), &LineStyle::traffic(CongestionLevel::High), Some(group));
        canvas.add_line(&points(), &LineStyle::traffic(CongestionLevel::Low), Some(group));
        assert_eq!(canvas.lines_in_group(group).count(), 2);

        canvas.clear_group(group);
        assert_eq!(canvas.lines_in_group(group).count(), 0);
        assert_eq!(canvas.lines().len(), 1);
        assert_eq!(canvas.lines()[0].id, route);
    }

    #[test]
    fn test_fit_to_line() {
        let mut canvas = MemoryCanvas::new();
        let id = canvas.add_line(&points(), &LineStyle::route(), None);
        canvas.fit_to_line(id);
        let viewport = canvas.viewport().expect("viewport set");
        assert_eq!(viewport.south_west, Coordinate::new(1.0, 1.0));
        assert_eq!(viewport.north_east, Coordinate::new(2.0, 3.0));
    }

    #[test]
    fn test_remove_unknown_line_is_noop() {
        let mut canvas = MemoryCanvas::new();
        canvas.add_line(&points(), &LineStyle::route(), None);
        canvas.remove_line(OverlayId(999));
        assert_eq!(canvas.lines().len(), 1);
    }
}
