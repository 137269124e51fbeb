use chrono::NaiveDate;
use proptest::prelude::*;
use rust_timeline::{
    coords, dates, lane_count, layout, DragKind, GestureFeedback, InteractionController,
    PointerTarget, TimelineConfig, TimelineItem, VisibleWindow, Zoom,
};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

prop_compose! {
    /// An item somewhere in the first year of 2024, up to two months long.
    fn arb_item(index: usize)(start_offset in 0i64..300, duration in 0i64..60) -> TimelineItem {
        let start = dates::add_days(base_date(), start_offset).unwrap();
        let end = dates::add_days(start, duration).unwrap();
        TimelineItem::with_id(index.to_string(), format!("Item {index}"), start, end)
    }
}

fn arb_items() -> impl Strategy<Value = Vec<TimelineItem>> {
    (1usize..40).prop_flat_map(|len| {
        (0..len).map(arb_item).collect::<Vec<_>>()
    })
}

fn test_window() -> VisibleWindow {
    VisibleWindow::new(
        dates::add_days(base_date(), -7).unwrap(),
        dates::add_days(base_date(), 400).unwrap(),
    )
}

/// Greatest number of items covering any single day; the theoretical
/// minimum lane count. Maximum coverage is always reached at some item's
/// start day.
fn max_concurrent(items: &[TimelineItem]) -> usize {
    items
        .iter()
        .map(|probe| {
            items
                .iter()
                .filter(|other| other.start <= probe.start && probe.start <= other.end)
                .count()
        })
        .max()
        .unwrap_or(0)
}

proptest! {
    /// No two items sharing a lane may overlap, endpoint touching included.
    #[test]
    fn prop_same_lane_items_never_overlap(items in arb_items()) {
        let positioned = layout(&items, &test_window(), Zoom::default()).unwrap();
        for a in &positioned {
            for b in &positioned {
                if a.item.id != b.item.id && a.lane == b.lane {
                    prop_assert!(
                        !dates::ranges_overlap(a.item.start, a.item.end, b.item.start, b.item.end),
                        "items {} and {} share lane {}",
                        a.item.id,
                        b.item.id,
                        a.lane,
                    );
                }
            }
        }
    }

    /// Greedy start-sorted placement uses exactly as many lanes as the
    /// busiest single day requires.
    #[test]
    fn prop_lane_count_is_optimal(items in arb_items()) {
        let positioned = layout(&items, &test_window(), Zoom::default()).unwrap();
        prop_assert_eq!(lane_count(&positioned), max_concurrent(&items));
    }

    /// Every day inside the window survives the percent round trip.
    #[test]
    fn prop_mapper_round_trips(offset in 0i64..=407) {
        let window = test_window();
        let date = dates::add_days(window.start, offset).unwrap();
        let percent = coords::date_to_percent(date, &window).unwrap();
        prop_assert_eq!(coords::percent_to_date(percent, &window).unwrap(), date);
    }

    /// A committed move never changes an item's duration, wherever the
    /// pointer ends up and however the clamps bite.
    #[test]
    fn prop_move_commits_preserve_duration(
        start_offset in 0i64..300,
        duration in 0i64..60,
        drag_px in -2000f64..2000.0,
    ) {
        let item = TimelineItem::with_id(
            "probe",
            "Probe",
            dates::add_days(base_date(), start_offset).unwrap(),
            dates::add_days(base_date(), start_offset + duration).unwrap(),
        );
        let window = test_window();
        let positioned = layout(
            std::slice::from_ref(&item),
            &window,
            Zoom::default(),
        )
        .unwrap()
        .remove(0);

        let mut controller =
            InteractionController::new(window, 1000.0, TimelineConfig::default());
        controller.handle_pointer_down(
            PointerTarget::Item { kind: DragKind::Move, item: positioned },
            500.0,
        );
        controller.handle_pointer_move(500.0 + drag_px);
        if let Some(update) = controller.handle_pointer_up() {
            let (new_start, new_end) = (update.start.unwrap(), update.end.unwrap());
            prop_assert_eq!((new_end - new_start).num_days(), duration);
            prop_assert!(new_start <= new_end);
        }
    }

    /// Preview positions during a drag always stay inside the window and
    /// above the width floor.
    #[test]
    fn prop_previews_respect_the_clamps(
        start_offset in 0i64..300,
        duration in 1i64..60,
        kind_pick in 0u8..3,
        drag_px in -2000f64..2000.0,
    ) {
        let kind = match kind_pick {
            0 => DragKind::Move,
            1 => DragKind::ResizeStart,
            _ => DragKind::ResizeEnd,
        };
        let item = TimelineItem::with_id(
            "probe",
            "Probe",
            dates::add_days(base_date(), start_offset).unwrap(),
            dates::add_days(base_date(), start_offset + duration).unwrap(),
        );
        let window = test_window();
        let positioned = layout(
            std::slice::from_ref(&item),
            &window,
            Zoom::default(),
        )
        .unwrap()
        .remove(0);

        let config = TimelineConfig::default();
        let mut controller = InteractionController::new(window, 1000.0, config);
        controller.handle_pointer_down(
            PointerTarget::Item { kind, item: positioned },
            500.0,
        );
        if let GestureFeedback::Preview { left, width, .. } =
            controller.handle_pointer_move(500.0 + drag_px)
        {
            prop_assert!(left >= 0.0);
            match kind {
                DragKind::Move => prop_assert!(left <= 100.0 - width),
                DragKind::ResizeStart | DragKind::ResizeEnd => {
                    prop_assert!(width >= config.min_item_width_pct);
                    prop_assert!(left + width <= 100.0 + config.min_item_width_pct);
                }
            }
        }
    }
}
