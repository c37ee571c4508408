//! Axis layout: tick positions, labels, and bounds.
//!
//! Y-axis placement is fixed-grid: the k-th resource (1-indexed) ticks
//! at `ORIGIN_OFFSET + k * TICK_DISTANCE`, and its band occupies the
//! `BAR_HEIGHT` units below-and-above so bands stack with no gaps.
//! X-axis bounds derive from job end times unless the schedule carries
//! explicit overrides.

use crate::layout::{LayoutError, BAR_HEIGHT, ORIGIN_OFFSET, TICK_DISTANCE, Y_MARGIN};
use crate::models::Schedule;

/// One labeled tick on the y-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Tick position in chart units.
    pub position: f64,
    /// Tick label (the resource name).
    pub label: String,
}

/// The vertical slice of chart space allocated to one resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Lower edge of the band.
    pub lower: f64,
    /// Band height.
    pub height: f64,
}

impl Band {
    /// Vertical center of the band (equal to the resource's tick).
    #[inline]
    pub fn center(&self) -> f64 {
        self.lower + self.height / 2.0
    }
}

/// Complete axis layout for a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    /// Y-axis ticks, one per resource in stacking order.
    pub yticks: Vec<AxisTick>,
    /// Y-axis upper bound.
    pub y_max: f64,
    /// X-axis upper bound.
    pub x_max: f64,
    /// Explicit x-axis ticks, or `None` to let the drawing surface
    /// place them automatically.
    pub xticks: Option<Vec<f64>>,
}

impl AxisLayout {
    /// Computes the full axis layout for a schedule.
    pub fn compute(schedule: &Schedule) -> Self {
        let x_max = x_max(schedule);
        Self {
            yticks: yticks(&schedule.resources),
            y_max: y_max(schedule.resource_count()),
            x_max,
            xticks: xticks(schedule.xticks_step_size, x_max),
        }
    }
}

/// Y-axis ticks for a resource list: the k-th resource (1-indexed)
/// ticks at `ORIGIN_OFFSET + k * TICK_DISTANCE`, labeled by name.
pub fn yticks(resources: &[String]) -> Vec<AxisTick> {
    resources
        .iter()
        .enumerate()
        .map(|(i, name)| AxisTick {
            position: ORIGIN_OFFSET + (i as f64 + 1.0) * TICK_DISTANCE,
            label: name.clone(),
        })
        .collect()
}

/// Y-axis upper bound: one band per resource plus `Y_MARGIN` bands of
/// headroom. Never below `Y_MARGIN` bands, even with zero resources.
pub fn y_max(resource_count: usize) -> f64 {
    TICK_DISTANCE * (resource_count + Y_MARGIN) as f64
}

/// Bar band for a resource, by its position in the resource list.
///
/// The band's lower edge sits `ORIGIN_OFFSET` below the resource's
/// tick, so the tick lands at the band's vertical center.
pub fn band_for(resources: &[String], resource: &str) -> Result<Band, LayoutError> {
    let index = resources
        .iter()
        .position(|name| name == resource)
        .ok_or_else(|| LayoutError::UnknownResource(resource.to_string()))?;
    let tick = ORIGIN_OFFSET + (index as f64 + 1.0) * TICK_DISTANCE;
    Ok(Band {
        lower: tick - ORIGIN_OFFSET,
        height: BAR_HEIGHT,
    })
}

/// X-axis upper bound: the explicit override if set, otherwise the
/// latest job end time, floored at 1 so an empty schedule still has a
/// valid positive range.
pub fn x_max(schedule: &Schedule) -> f64 {
    match schedule.xticks_max_value {
        Some(max) => max,
        None => schedule.latest_end_time().unwrap_or(0.0).max(1.0),
    }
}

/// Explicit x-axis ticks for a given step size and upper bound.
///
/// Ticks run from 0 through the largest multiple of `step` not
/// exceeding `upper`; `upper` itself is then appended exactly once if
/// it is not already the final tick, so the rightmost edge is always
/// labeled. A `None` or non-positive step yields `None` (automatic
/// ticks).
pub fn xticks(step: Option<f64>, upper: f64) -> Option<Vec<f64>> {
    let step = step?;
    if step <= 0.0 {
        return None;
    }

    let mut ticks = Vec::new();
    let mut k = 0u64;
    // Multiply rather than accumulate so long ranges stay exact.
    while k as f64 * step <= upper {
        ticks.push(k as f64 * step);
        k += 1;
    }
    if ticks.last() != Some(&upper) {
        ticks.push(upper);
    }
    Some(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    fn resources(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_ytick_positions() {
        let ticks = yticks(&resources(&["A", "B", "C"]));
        let positions: Vec<f64> = ticks.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![15.0, 25.0, 35.0]);

        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_band_edges() {
        let rs = resources(&["A", "B", "C"]);
        let lowers: Vec<f64> = rs
            .iter()
            .map(|r| band_for(&rs, r).unwrap().lower)
            .collect();
        assert_eq!(lowers, vec![10.0, 20.0, 30.0]);

        // Band center coincides with the tick.
        let band = band_for(&rs, "B").unwrap();
        assert_eq!(band.center(), 25.0);
        assert_eq!(band.height, 10.0);
    }

    #[test]
    fn test_band_unknown_resource() {
        let rs = resources(&["A"]);
        assert_eq!(
            band_for(&rs, "Z"),
            Err(LayoutError::UnknownResource("Z".to_string()))
        );
    }

    #[test]
    fn test_y_max() {
        assert_eq!(y_max(3), 50.0);
        // Zero resources still leave margin headroom.
        assert_eq!(y_max(0), 20.0);
    }

    #[test]
    fn test_x_max_from_job_end_times() {
        let s = Schedule::new().with_jobs(vec![
            Job::new("a", "R", 40.0, 50.0),
            Job::new("b", "R", 110.0, 10.0),
            Job::new("c", "R", 150.0, 10.0),
        ]);
        assert_eq!(x_max(&s), 160.0);
    }

    #[test]
    fn test_x_max_empty_schedule_floors_at_one() {
        assert_eq!(x_max(&Schedule::new()), 1.0);
    }

    #[test]
    fn test_x_max_override_wins() {
        let s = Schedule::new()
            .with_jobs(vec![Job::new("a", "R", 0.0, 500.0)])
            .with_xticks_max_value(165.0);
        assert_eq!(x_max(&s), 165.0);
    }

    #[test]
    fn test_xticks_exact_multiple_not_duplicated() {
        let ticks = xticks(Some(8.0), 160.0).unwrap();
        assert_eq!(ticks.len(), 21);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[1], 8.0);
        assert_eq!(*ticks.last().unwrap(), 160.0);
        assert_eq!(ticks[19], 152.0);
    }

    #[test]
    fn test_xticks_upper_appended_once() {
        let ticks = xticks(Some(8.0), 165.0).unwrap();
        let tail: Vec<f64> = ticks[ticks.len() - 2..].to_vec();
        assert_eq!(tail, vec![160.0, 165.0]);
        assert_eq!(ticks.iter().filter(|&&t| t == 165.0).count(), 1);
    }

    #[test]
    fn test_xticks_without_step() {
        assert_eq!(xticks(None, 100.0), None);
        assert_eq!(xticks(Some(0.0), 100.0), None);
    }

    #[test]
    fn test_axis_layout_compute() {
        let s = Schedule::new()
            .with_resources(resources(&["Unit 1", "Unit 2"]))
            .with_jobs(vec![Job::new("Job1", "Unit 1", 0.0, 90.0)])
            .with_xticks_step_size(30.0);
        let layout = AxisLayout::compute(&s);

        assert_eq!(layout.y_max, 40.0);
        assert_eq!(layout.x_max, 90.0);
        assert_eq!(layout.yticks.len(), 2);
        assert_eq!(layout.xticks, Some(vec![0.0, 30.0, 60.0, 90.0]));
    }
}
