use raster_paint::{
    CanvasError, Color, Command, CommandOutcome, DrawingSession, PixelBuffer, SessionConfig,
    ShapeMode,
};

fn white_session(width: u32, height: u32) -> DrawingSession {
    DrawingSession::with_size(width, height).unwrap()
}

fn run(session: &mut DrawingSession, commands: &[Command]) {
    for command in commands {
        session.apply(command).unwrap();
    }
}

fn all_pixels(buffer: &PixelBuffer, color: Color) -> bool {
    buffer.data().chunks_exact(4).all(|p| p == color.to_array())
}

#[test]
fn test_fill_then_undo() {
    let mut session = white_session(10, 10);
    run(
        &mut session,
        &[
            Command::SetTool { name: "fill".into() },
            Command::SetColor { hex: "#ff0000".into() },
            Command::PointerDown { x: 5, y: 5 },
            Command::PointerUp,
        ],
    );
    assert!(all_pixels(session.buffer(), Color::rgba(255, 0, 0, 255)));

    session.apply(&Command::Undo).unwrap();
    assert!(all_pixels(session.buffer(), Color::WHITE));
}

#[test]
fn test_rectangle_stamp_covers_exactly_its_box() {
    let mut session = white_session(100, 100);
    run(
        &mut session,
        &[
            Command::SetShape { name: "rectangle".into() },
            Command::SetTool { name: "shape".into() },
            Command::SetColor { hex: "#000000".into() },
            Command::PointerDown { x: 50, y: 50 },
            Command::PointerUp,
        ],
    );

    let half = session.config().stamp_size as i32 / 2;
    let span = (50 - half)..(50 + half);
    let buffer = session.buffer();
    for y in 0..100 {
        for x in 0..100 {
            let expected = if span.contains(&x) && span.contains(&y) {
                Color::BLACK
            } else {
                Color::WHITE
            };
            assert_eq!(buffer.get_pixel(x, y).unwrap(), expected, "pixel ({x}, {y})");
        }
    }
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_single_point_stroke_leaves_a_dot() {
    let mut session = white_session(20, 20);
    run(
        &mut session,
        &[
            Command::SetTool { name: "pen".into() },
            Command::PointerDown { x: 10, y: 10 },
            Command::PointerUp,
        ],
    );

    let buffer = session.buffer();
    let painted: Vec<(i32, i32)> = (0..20)
        .flat_map(|y| (0..20).map(move |x| (x, y)))
        .filter(|&(x, y)| buffer.get_pixel(x, y).unwrap() == Color::BLACK)
        .collect();

    assert!(!painted.is_empty());
    let min_x = painted.iter().map(|p| p.0).min().unwrap();
    let max_x = painted.iter().map(|p| p.0).max().unwrap();
    let min_y = painted.iter().map(|p| p.1).min().unwrap();
    let max_y = painted.iter().map(|p| p.1).max().unwrap();
    // Diameter 5 centred on the click
    assert_eq!((min_x, max_x), (8, 12));
    assert_eq!((min_y, max_y), (8, 12));
    // Round, so the corners of the bounding square stay white
    assert!(!painted.contains(&(8, 8)));
    assert!(!painted.contains(&(12, 12)));
}

#[test]
fn test_stroke_follows_moves_and_ends_on_leave() {
    let mut session = white_session(40, 20);
    run(
        &mut session,
        &[
            Command::PointerDown { x: 5, y: 10 },
            Command::PointerMove { x: 20, y: 10 },
            Command::PointerMove { x: 35, y: 10 },
            Command::PointerLeave,
            // Moving after leaving must not keep painting
            Command::PointerMove { x: 35, y: 2 },
        ],
    );

    let buffer = session.buffer();
    for x in 5..=35 {
        assert_eq!(buffer.get_pixel(x, 10).unwrap(), Color::BLACK);
    }
    assert_eq!(buffer.get_pixel(35, 2).unwrap(), Color::WHITE);
    assert!(session.state().is_idle());
    // One stroke, one history entry
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_stroke_dragged_off_canvas_is_clipped() {
    let mut session = white_session(30, 20);
    run(
        &mut session,
        &[
            Command::PointerDown { x: 10, y: 10 },
            Command::PointerMove { x: -5, y: 10 },
            Command::PointerMove { x: i32::MIN, y: i32::MAX },
            Command::PointerMove { x: i32::MAX, y: i32::MIN },
            Command::PointerUp,
        ],
    );

    let buffer = session.buffer();
    assert_eq!((buffer.width(), buffer.height()), (30, 20));
    assert_eq!(buffer.data().len(), 30 * 20 * 4);
    for x in 0..=10 {
        assert_eq!(buffer.get_pixel(x, 10).unwrap(), Color::BLACK);
    }
    assert!(session.state().is_idle());
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_leaving_during_a_shape_drag_commits_it_once() {
    let config = SessionConfig {
        width: 100,
        height: 100,
        shape_mode: ShapeMode::Drag,
        ..SessionConfig::default()
    };
    let mut session = DrawingSession::new(config).unwrap();
    run(
        &mut session,
        &[
            Command::SetShape { name: "crescent".into() },
            Command::SetTool { name: "shape".into() },
            Command::PointerDown { x: 20, y: 20 },
            Command::PointerMove { x: 1_000_000, y: -1_000_000 },
        ],
    );
    // Nothing is committed while the drag is in progress
    assert!(!session.can_undo());

    run(&mut session, &[Command::PointerLeave, Command::PointerUp]);
    assert!(session.state().is_idle());
    assert_eq!(session.history().len(), 1);
    // The crescent lies far outside the canvas, so every pixel is clipped
    assert!(all_pixels(session.buffer(), Color::WHITE));

    session.apply(&Command::Undo).unwrap();
    assert!(!session.can_undo());
}

#[test]
fn test_every_edit_is_one_undo_step() {
    let mut session = white_session(30, 30);
    let mut states = vec![session.buffer().clone()];

    run(&mut session, &[Command::PointerDown { x: 3, y: 3 }, Command::PointerUp]);
    states.push(session.buffer().clone());

    run(
        &mut session,
        &[
            Command::SetShape { name: "circle".into() },
            Command::SetTool { name: "shape".into() },
            Command::PointerDown { x: 15, y: 15 },
        ],
    );
    states.push(session.buffer().clone());

    run(
        &mut session,
        &[
            Command::SetTool { name: "fill".into() },
            Command::SetColor { hex: "#00ff00".into() },
            Command::PointerDown { x: 29, y: 0 },
        ],
    );
    states.push(session.buffer().clone());

    run(&mut session, &[Command::Clear]);
    states.push(session.buffer().clone());

    run(&mut session, &[Command::FillCanvas]);

    assert_eq!(session.history().len(), 5);
    while let Some(expected) = states.pop() {
        session.apply(&Command::Undo).unwrap();
        assert_eq!(session.buffer(), &expected);
    }
    assert!(matches!(
        session.apply(&Command::Undo),
        Err(CanvasError::EmptyHistory)
    ));
}

#[test]
fn test_history_keeps_only_the_last_twenty() {
    let mut session = white_session(4, 4);
    session.set_tool("fill").unwrap();

    // 21 fills alternating colors; the first pre-fill state is evicted
    for i in 0..21u8 {
        session.select_color(Color::rgb(i, i, i));
        session.pointer_down(0, 0).unwrap();
        session.pointer_up().unwrap();
    }
    assert_eq!(session.history().len(), 20);

    while session.undo().is_ok() {}
    // Oldest reachable state is the result of the first fill, not white
    assert_eq!(session.buffer().get_pixel(0, 0).unwrap(), Color::rgb(0, 0, 0));
}

#[test]
fn test_export_outcome() {
    let mut session = white_session(8, 8);
    match session.apply(&Command::Export).unwrap() {
        CommandOutcome::Exported(png) => {
            let decoded = PixelBuffer::from_png(&png, Color::WHITE).unwrap();
            assert_eq!(&decoded, session.buffer());
        }
        CommandOutcome::Done => panic!("export should produce bytes"),
    }
    // Exporting is not an edit
    assert!(!session.can_undo());
}

#[test]
fn test_rejected_input_keeps_previous_state() {
    let mut session = white_session(8, 8);
    session.apply(&Command::SetColor { hex: "#336699".into() }).unwrap();
    assert!(matches!(
        session.apply(&Command::SetColor { hex: "336699".into() }),
        Err(CanvasError::InvalidColor(_))
    ));
    assert_eq!(session.color(), Color::rgb(0x33, 0x66, 0x99));
}
