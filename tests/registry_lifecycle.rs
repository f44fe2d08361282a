use eframe_whiteboard::panels::{self, BoardView};
use eframe_whiteboard::{
    BoardEvent, FrameLayout, Mount, NormPos, PressTarget, WhiteboardConfig, WhiteboardError, WhiteboardRegistry,
};
use egui::{Event, Key, Modifiers, PointerButton, Pos2, Rect, Vec2};

fn create_test_layout() -> FrameLayout {
    let mut layout = FrameLayout::new();
    layout.set_root(Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(400.0, 300.0)));
    layout.insert_named("#notes", Rect::from_min_size(Pos2::new(500.0, 0.0), Vec2::new(200.0, 100.0)));
    layout
}

fn press(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn test_create_sizes_the_surface() {
    let layout = create_test_layout();
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());

    let id = registry.create(Mount::Selector("#notes".into()), &layout).unwrap();

    let board = registry.get(id).unwrap();
    assert_eq!(board.canvas().geometry().size(), Vec2::new(200.0, 100.0));
    assert_eq!(board.canvas().surface().ops().len(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_create_without_container_fails() {
    let layout = create_test_layout();
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());

    let result = registry.create(Mount::Selector("#missing".into()), &layout);

    assert!(matches!(result, Err(WhiteboardError::ContainerNotFound { .. })));
    assert!(registry.is_empty());
}

#[test]
fn test_element_mounts_resolve_by_id() {
    let mut layout = FrameLayout::new();
    let element = egui::Id::new("sketch");
    layout.insert_element(element, Rect::from_min_size(Pos2::ZERO, Vec2::splat(50.0)));
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());

    assert!(registry.create(Mount::Element(element), &layout).is_ok());
    assert!(registry.create(Mount::Root, &layout).is_err());
}

#[test]
fn test_destroy_removes_only_that_board() {
    let layout = create_test_layout();
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());
    let root = registry.create(Mount::Root, &layout).unwrap();
    let notes = registry.create(Mount::Selector("#notes".into()), &layout).unwrap();

    let removed = registry.destroy(notes).unwrap();

    assert_eq!(removed.id(), notes);
    assert!(registry.get(root).is_some());
    assert!(registry.get(notes).is_none());
    assert!(matches!(registry.destroy(notes), Err(WhiteboardError::UnknownBoard(_))));
}

#[test]
fn test_resize_all_keeps_history() {
    let mut layout = create_test_layout();
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());
    let id = registry.create(Mount::Root, &layout).unwrap();
    {
        let board = registry.get_mut(id).unwrap();
        board.emit(&BoardEvent::PointerDown { pos: NormPos::new(0.1, 0.1) });
        board.emit(&BoardEvent::PointerUp { pos: NormPos::new(0.9, 0.9) });
    }
    let strokes = registry.get(id).unwrap().canvas().history().strokes().to_vec();

    layout.set_root(Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(800.0, 600.0)));
    assert_eq!(registry.resize_all(&layout), 1);

    let canvas = registry.get(id).unwrap().canvas();
    assert_eq!(canvas.geometry().size(), Vec2::new(800.0, 600.0));
    assert_eq!(canvas.history().strokes(), strokes.as_slice());
    assert_eq!(canvas.history().undo_stack(), &[0]);
    assert_eq!(canvas.surface().line_count(), 1);
}

#[test]
fn test_resize_all_skips_missing_containers() {
    let layout = create_test_layout();
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());
    registry.create(Mount::Root, &layout).unwrap();
    registry.create(Mount::Selector("#notes".into()), &layout).unwrap();

    let mut shrunk = FrameLayout::new();
    shrunk.set_root(Rect::from_min_size(Pos2::ZERO, Vec2::splat(100.0)));

    assert_eq!(registry.resize_all(&shrunk), 1);
}

#[test]
fn test_boards_are_independent() {
    let layout = create_test_layout();
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());
    let root = registry.create(Mount::Root, &layout).unwrap();
    let notes = registry.create(Mount::Selector("#notes".into()), &layout).unwrap();

    registry.handle_events(
        &[
            press(Pos2::new(550.0, 50.0), true),
            Event::PointerMoved(Pos2::new(600.0, 50.0)),
            press(Pos2::new(650.0, 50.0), false),
        ],
        &PressTarget::Broadcast,
    );

    assert!(registry.get(root).unwrap().canvas().history().strokes().is_empty());
    assert_eq!(registry.get(notes).unwrap().canvas().history().strokes().len(), 2);
    assert_eq!(registry.active_id(), Some(notes));
}

#[test]
fn test_keys_go_to_the_active_board() {
    let layout = create_test_layout();
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());
    let root = registry.create(Mount::Root, &layout).unwrap();
    let notes = registry.create(Mount::Selector("#notes".into()), &layout).unwrap();
    let gesture = [
        press(Pos2::new(100.0, 100.0), true),
        press(Pos2::new(150.0, 100.0), false),
    ];
    registry.handle_events(&gesture, &PressTarget::Broadcast);
    let gesture = [
        press(Pos2::new(550.0, 50.0), true),
        press(Pos2::new(600.0, 50.0), false),
    ];
    registry.handle_events(&gesture, &PressTarget::Broadcast);

    let undo = Event::Key {
        key: Key::Z,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: Modifiers::CTRL,
    };
    registry.handle_events(&[undo], &PressTarget::Broadcast);

    assert_eq!(registry.get(root).unwrap().canvas().history().strokes().len(), 1);
    assert!(registry.get(notes).unwrap().canvas().history().strokes().is_empty());
}

#[test]
fn test_presses_reach_only_the_hovered_board() {
    let mut layout = FrameLayout::new();
    let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(100.0));
    layout.set_root(rect);
    layout.insert_named("#overlay", rect);
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());
    let root = registry.create(Mount::Root, &layout).unwrap();
    let overlay_mount = Mount::Selector("#overlay".into());
    let overlay = registry.create(overlay_mount.clone(), &layout).unwrap();

    registry.handle_events(
        &[press(Pos2::new(10.0, 10.0), true), press(Pos2::new(20.0, 20.0), false)],
        &PressTarget::Board(overlay_mount.clone()),
    );

    assert!(registry.get(root).unwrap().canvas().history().strokes().is_empty());
    assert_eq!(registry.get(overlay).unwrap().canvas().history().strokes().len(), 1);
}

fn create_view(mount: Mount, rect: Rect, contains_pointer: bool) -> BoardView {
    let painter = egui::Painter::new(egui::Context::default(), egui::LayerId::background(), rect);
    BoardView {
        mount,
        painter,
        contains_pointer,
    }
}

#[test]
fn test_press_target_prefers_the_topmost_hovered_view() {
    let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(100.0));
    let notes = Mount::Selector("#notes".into());
    let views = [
        create_view(Mount::Root, rect, true),
        create_view(notes.clone(), rect, true),
    ];

    assert_eq!(panels::press_target(&views), PressTarget::Board(notes));
}

#[test]
fn test_press_over_window_chrome_targets_nothing() {
    // The pointer sits inside the root box, but a window title bar covers it
    let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(100.0));
    let views = [
        create_view(Mount::Root, rect, false),
        create_view(Mount::Selector("#notes".into()), rect, false),
    ];

    let target = panels::press_target(&views);

    assert_eq!(target, PressTarget::Nothing);
    assert!(!target.accepts(&Mount::Root));
}

#[test]
fn test_untargeted_press_draws_nowhere() {
    let layout = create_test_layout();
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());
    let root = registry.create(Mount::Root, &layout).unwrap();
    let notes = registry.create(Mount::Selector("#notes".into()), &layout).unwrap();
    registry.set_active(notes).unwrap();

    registry.handle_events(
        &[
            press(Pos2::new(100.0, 100.0), true),
            Event::PointerMoved(Pos2::new(150.0, 100.0)),
            press(Pos2::new(200.0, 100.0), false),
        ],
        &PressTarget::Nothing,
    );

    assert!(registry.get(root).unwrap().canvas().history().strokes().is_empty());
    assert!(!registry.get(root).unwrap().canvas().history().can_undo());
    assert_eq!(registry.active_id(), Some(notes));
}

#[test]
fn test_set_active_rejects_unknown_board() {
    let layout = create_test_layout();
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());
    let root = registry.create(Mount::Root, &layout).unwrap();
    let gone = registry.create(Mount::Selector("#notes".into()), &layout).unwrap();
    registry.destroy(gone).unwrap();

    let result = registry.set_active(gone);

    assert!(matches!(result, Err(WhiteboardError::UnknownBoard(id)) if id == gone));
    assert_eq!(registry.active_id(), Some(root));
}

#[test]
fn test_board_undo_redo_report_changes() {
    let layout = create_test_layout();
    let mut registry = WhiteboardRegistry::new(WhiteboardConfig::default());
    let root = registry.create(Mount::Root, &layout).unwrap();
    let board = registry.get_mut(root).unwrap();

    assert!(!board.undo());
    assert!(!board.redo());

    board.emit(&BoardEvent::PointerDown {
        pos: NormPos::new(0.1, 0.1),
    });
    board.emit(&BoardEvent::PointerUp {
        pos: NormPos::new(0.2, 0.2),
    });

    assert!(board.undo());
    assert!(!board.undo());
    assert!(board.redo());
    assert!(!board.redo());
    assert_eq!(board.canvas().history().strokes().len(), 1);
}

