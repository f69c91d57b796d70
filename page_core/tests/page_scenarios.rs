//! End-to-end behaviour of the page controller against simulated layouts.

use nomofobia_core::{
    LayoutSnapshot, MainSection, NavigationOutcome, PageConfig, PageController, PageEvent,
    PageVariant, SectionRecord, SimulatedViewport, Viewport, nav,
};
use pretty_assertions::assert_eq;

fn three_sections() -> SimulatedViewport {
    SimulatedViewport::new(LayoutSnapshot::stacked([
        ("inicio", 800.0),
        ("definicion", 800.0),
        ("sintomas", 800.0),
    ]))
}

/// Renders the sections of a mode back to back, like the split page does.
fn rendered(mode: MainSection, height: f64) -> LayoutSnapshot {
    LayoutSnapshot::stacked(nav::nav_items(mode).iter().map(|item| (item.id, height)))
}

fn scroll(page: &mut PageController, viewport: &mut SimulatedViewport, offset: f64) {
    viewport.set_scroll_y(offset);
    page.dispatch(PageEvent::Scrolled { offset }, viewport);
}

#[test]
fn reference_scenario() {
    let mut page = PageController::default();
    let mut viewport = three_sections();

    scroll(&mut page, &mut viewport, 750.0);
    assert_eq!(page.state().active_section_id(), "definicion");

    scroll(&mut page, &mut viewport, 50.0);
    assert_eq!(page.state().active_section_id(), "inicio");

    scroll(&mut page, &mut viewport, 1000.0);
    scroll(&mut page, &mut viewport, 2500.0);
    assert_eq!(page.state().active_section_id(), "definicion");
    assert!(page.state().show_scroll_top_button());
}

#[test]
fn offsets_above_first_section_keep_previous_value() {
    let mut page = PageController::new(PageConfig {
        initial_section: "definicion".into(),
        ..Default::default()
    });
    let mut viewport = SimulatedViewport::new(LayoutSnapshot {
        sections: vec![SectionRecord {
            id: "inicio".into(),
            top: 600.0,
            height: 800.0,
        }],
    });

    for offset in [0.0, 100.0, 250.0, 499.0] {
        scroll(&mut page, &mut viewport, offset);
        assert_eq!(page.state().active_section_id(), "definicion", "offset {offset}");
    }
}

#[test]
fn every_section_wins_inside_its_own_range() {
    let layout = rendered(MainSection::Nomofobia, 640.0);
    let mut viewport = SimulatedViewport::new(layout.clone());
    let mut page = PageController::default();

    for record in &layout.sections {
        for fraction in [0.0, 0.25, 0.5, 0.99] {
            let probe = record.top + record.height * fraction;
            let offset = (probe - 100.0).max(0.0);
            if offset + 100.0 < record.top {
                continue;
            }
            scroll(&mut page, &mut viewport, offset);
            assert_eq!(page.state().active_section_id(), record.id, "offset {offset}");
        }
    }
}

#[test]
fn scroll_top_button_follows_raw_offset_only() {
    let mut page = PageController::default();
    let mut viewport = three_sections();

    scroll(&mut page, &mut viewport, 300.0);
    assert!(!page.state().show_scroll_top_button());
    assert_eq!(page.state().active_section_id(), "inicio");

    scroll(&mut page, &mut viewport, 301.0);
    assert!(page.state().show_scroll_top_button());
    assert_eq!(page.state().active_section_id(), "inicio");

    scroll(&mut page, &mut viewport, 10.0);
    assert!(!page.state().show_scroll_top_button());
}

#[test]
fn navigation_converges_once_scroll_settles() {
    let mut page = PageController::default();
    let mut viewport = SimulatedViewport::new(rendered(MainSection::Nomofobia, 700.0));
    page.dispatch(PageEvent::ToggleMobileMenu, &mut viewport);
    assert!(page.state().is_mobile_menu_open());

    for target in ["tips", "definicion", "experiencia", "inicio"] {
        page.dispatch(PageEvent::NavigateTo(target.into()), &mut viewport);
        assert!(!page.state().is_mobile_menu_open());

        let settled = viewport.scroll_y();
        page.dispatch(PageEvent::Scrolled { offset: settled }, &mut viewport);
        assert_eq!(page.state().active_section_id(), target);
    }
}

#[test]
fn navigation_to_missing_anchor_only_closes_menu() {
    let mut page = PageController::default();
    let mut viewport = three_sections();
    scroll(&mut page, &mut viewport, 900.0);
    page.toggle_mobile_menu();
    let before = page.state().clone();

    let outcome = page.navigate_to("evolucion", &mut viewport);

    assert_eq!(outcome, NavigationOutcome::MissingAnchor);
    assert_eq!(viewport.scroll_y(), 900.0);
    assert!(!page.state().is_mobile_menu_open());
    assert_eq!(page.state().active_section_id(), before.active_section_id());
    assert_eq!(
        page.state().show_scroll_top_button(),
        before.show_scroll_top_button()
    );
    assert_eq!(
        page.state().current_main_section(),
        before.current_main_section()
    );
}

#[test]
fn mode_switch_always_lands_at_top_with_last_requested_mode() {
    let mut page = PageController::default();
    let mut viewport = SimulatedViewport::new(rendered(MainSection::Nomofobia, 900.0));

    let requests = [
        MainSection::Almacenamiento,
        MainSection::Almacenamiento,
        MainSection::Multimedia,
        MainSection::Nomofobia,
        MainSection::Multimedia,
    ];
    for mode in requests {
        viewport.set_scroll_y(1234.0);
        page.dispatch(PageEvent::SwitchMainSection(mode), &mut viewport);
        viewport.set_layout(rendered(mode, 900.0));

        assert_eq!(viewport.scroll_y(), 0.0);
        assert_eq!(page.state().current_main_section(), Some(mode));
        assert_eq!(page.theme(), mode.theme());
    }
}

#[test]
fn anchors_of_other_modes_are_unreachable_after_switch() {
    let mut page = PageController::default();
    let mut viewport = SimulatedViewport::new(rendered(MainSection::Nomofobia, 800.0));

    page.switch_main_section(MainSection::Almacenamiento, &mut viewport);
    viewport.set_layout(rendered(MainSection::Almacenamiento, 800.0));

    assert_eq!(
        page.navigate_to("sintomas", &mut viewport),
        NavigationOutcome::MissingAnchor
    );
    assert_eq!(
        page.navigate_to("evolucion", &mut viewport),
        NavigationOutcome::Scrolling
    );
    let settled = viewport.scroll_y();
    scroll(&mut page, &mut viewport, settled);
    assert_eq!(page.state().active_section_id(), "evolucion");
}

#[test]
fn ventajas_section_is_tracked_in_multimedia_mode() {
    let mut page = PageController::new(PageConfig {
        initial_mode: MainSection::Multimedia,
        ..Default::default()
    });
    let mut viewport = SimulatedViewport::new(rendered(MainSection::Multimedia, 800.0));

    scroll(&mut page, &mut viewport, 1700.0);
    assert_eq!(page.state().active_section_id(), "ventajas-multimedia");
}

#[test]
fn merged_page_walks_all_modes_in_order() {
    let mut page = PageController::new(PageConfig {
        variant: PageVariant::Merged,
        ..Default::default()
    });
    let items = nav::merged_items();
    let mut viewport = SimulatedViewport::new(LayoutSnapshot::stacked(
        items.iter().map(|item| (item.id, 500.0)),
    ));

    let mut seen = Vec::new();
    let mut offset = 0.0;
    while offset < 500.0 * items.len() as f64 {
        scroll(&mut page, &mut viewport, offset);
        let active = page.state().active_section_id().to_string();
        if seen.last() != Some(&active) {
            seen.push(active);
        }
        offset += 250.0;
    }

    let expected: Vec<String> = items.iter().map(|item| item.id.to_string()).collect();
    assert_eq!(seen, expected);
}
