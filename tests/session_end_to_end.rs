use escape_time_explorer::core::actions::generate_fractal::generate_fractal::generate_fractal;
use escape_time_explorer::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use escape_time_explorer::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use escape_time_explorer::core::colour_mapping::maps::hue_cycle::HueCycleColourMap;
use escape_time_explorer::presenters::logging::presenter::LogPresenter;
use escape_time_explorer::{
    CommandOutcome, FractalKinds, FrameBuffer, PixelSink, Point, RenderEvent, RenderSession,
    SessionCommand, SessionConfig, SessionPresenterPort,
};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT: Option<Duration> = Some(Duration::from_secs(60));

fn start(size: u32, threads: usize) -> (RenderSession, Arc<FrameBuffer>, Arc<LogPresenter>) {
    let frame_buffer = Arc::new(FrameBuffer::new(size));
    let presenter = Arc::new(LogPresenter::new());
    let config = SessionConfig {
        size,
        threads: NonZeroUsize::new(threads).unwrap(),
        ..SessionConfig::default()
    };

    let session = RenderSession::new(
        config,
        Arc::clone(&frame_buffer) as Arc<dyn PixelSink>,
        Arc::clone(&presenter) as Arc<dyn SessionPresenterPort>,
    )
    .unwrap();

    (session, frame_buffer, presenter)
}

#[test]
fn every_fractal_matches_sequential_render_regardless_of_thread_count() {
    for threads in [1, 3, 8] {
        let (mut session, frame_buffer, _) = start(100, threads);

        for &fractal in FractalKinds::ALL {
            session.switch_fractal(fractal).unwrap();
            assert!(session.wait_until_idle(TIMEOUT));

            let results = generate_fractal(&fractal, &session.viewport(), 100);
            let expected = generate_pixel_buffer(&results, &HueCycleColourMap, 100).unwrap();

            assert_eq!(frame_buffer.export_image(), expected, "{} on {} threads", fractal, threads);
        }
    }
}

#[test]
fn frame_event_follows_completed_render() {
    let (mut session, frame_buffer, presenter) = start(64, 4);

    let generation = session.render().unwrap();
    assert!(session.wait_until_idle(TIMEOUT));

    match presenter.take_event() {
        Some(RenderEvent::Frame(frame)) => {
            assert_eq!(frame.generation, generation);
            assert_eq!(frame.size, 64);
        }
        other => panic!("expected a frame event, got {:?}", other),
    }

    assert_eq!(session.rows_remaining(), 0);
    assert!(session.input_enabled());
    assert_eq!(session.last_completed_generation(), generation);
    assert_eq!(frame_buffer.take_dirty_rows(), (0..64).collect::<Vec<u32>>());
    assert_eq!(frame_buffer.full_refreshes(), 1);
}

#[test]
fn zoom_switch_reset_and_save_sequence() {
    let (mut session, _, _) = start(50, 2);

    session.render().unwrap();
    assert!(session.wait_until_idle(TIMEOUT));

    session
        .handle(SessionCommand::ZoomClick(Point::new(10, 40)))
        .unwrap();
    assert!(session.wait_until_idle(TIMEOUT));
    assert_eq!(session.viewport().width(), 1.5);

    session
        .handle(SessionCommand::SwitchAlgorithm("tricorn".to_string()))
        .unwrap();
    assert!(session.wait_until_idle(TIMEOUT));
    assert_eq!(session.viewport(), FractalKinds::Tricorn.algorithm().initial_viewport());

    session
        .handle(SessionCommand::ZoomClick(Point::new(25, 25)))
        .unwrap();
    assert!(session.wait_until_idle(TIMEOUT));
    session.handle(SessionCommand::Reset).unwrap();
    assert!(session.wait_until_idle(TIMEOUT));
    assert_eq!(session.viewport(), FractalKinds::Tricorn.algorithm().initial_viewport());

    let saved = match session.handle(SessionCommand::Save).unwrap() {
        CommandOutcome::Exported(buffer) => buffer,
        other => panic!("expected an export, got {:?}", other),
    };
    let results = generate_fractal(&FractalKinds::Tricorn, &session.viewport(), 50);
    let expected = generate_pixel_buffer(&results, &HueCycleColourMap, 50).unwrap();

    assert_eq!(saved, expected);
    assert_eq!(session.generation(), 5);
}
