mod common;

mod tests {
    use embassy_time::Duration;
    use myrtio_status_led::color::{BLACK, RED};
    use myrtio_status_led::{BlinkStyle, IntentChannel, PollScheduler, StatusIntent, StatusLed};

    use super::common::{RecordingRenderer, at};

    fn engine() -> StatusLed<RecordingRenderer, 2> {
        StatusLed::new(RecordingRenderer::default())
    }

    #[test]
    fn test_idle_engine_sleeps_max_idle() {
        let mut scheduler = PollScheduler::new(engine());
        let result = scheduler.poll(at(1000));
        assert!(!result.rendered);
        assert_eq!(result.next_deadline, at(1050));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));
    }

    #[test]
    fn test_sleeps_until_next_toggle() {
        let mut scheduler = PollScheduler::new(engine()).with_max_idle(Duration::from_millis(5000));
        scheduler
            .engine_mut()
            .set_color_style(0, RED, BlinkStyle::BlinkSlow, true);

        let result = scheduler.poll(at(0));
        assert!(result.rendered);
        assert_eq!(result.next_deadline, at(1000));
        assert_eq!(result.sleep_duration, Duration::from_millis(1000));

        let result = scheduler.poll(at(400));
        assert!(!result.rendered);
        assert_eq!(result.sleep_duration, Duration::from_millis(600));

        let result = scheduler.poll(at(1000));
        assert!(result.rendered);
        assert_eq!(scheduler.engine().resolve_color(0), BLACK);
    }

    #[test]
    fn test_late_poll_does_not_sleep() {
        let mut scheduler = PollScheduler::new(engine());
        scheduler
            .engine_mut()
            .set_color_style(1, RED, BlinkStyle::BlinkFast, true);
        scheduler.poll(at(0));
        // The 250ms toggle happens in this poll, the next one is capped by the idle bound
        let result = scheduler.poll(at(300));
        assert!(result.rendered);
        assert_eq!(result.sleep_duration, Duration::from_millis(50));
    }

    #[test]
    fn test_applies_intents_on_poll() {
        let channel: IntentChannel<4> = IntentChannel::new();
        let sender = channel.sender();
        let mut scheduler = PollScheduler::with_intents(engine(), channel.receiver());

        sender.try_send(StatusIntent::set_color(1, RED)).unwrap();
        let result = scheduler.poll(at(0));
        assert!(result.rendered);
        assert_eq!(scheduler.engine().resolve_color(1), RED);
        assert_eq!(
            scheduler.engine().renderer().last_frame(),
            Some(&[BLACK, RED][..])
        );

        let led = scheduler.into_engine();
        assert_eq!(led.renderer().render_count(), 1);
    }

    #[test]
    fn test_queued_blink_renders_once_per_poll() {
        let channel: IntentChannel<4> = IntentChannel::new();
        let sender = channel.sender();
        let mut scheduler = PollScheduler::with_intents(engine(), channel.receiver());

        sender
            .try_send(StatusIntent::SetColorStyle {
                pixel: 0,
                color: RED,
                style: BlinkStyle::BlinkFast,
            })
            .unwrap();
        let result = scheduler.poll(at(0));
        assert!(result.rendered);

        let frames = &scheduler.engine().renderer().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0], vec![RED, BLACK]);
    }

    #[test]
    fn test_queued_change_renders_when_tick_is_idle() {
        let channel: IntentChannel<4> = IntentChannel::new();
        let sender = channel.sender();
        let mut scheduler = PollScheduler::with_intents(engine(), channel.receiver());
        scheduler
            .engine_mut()
            .set_color_style(1, RED, BlinkStyle::BlinkSlow, false);
        scheduler.poll(at(0));
        let renders = scheduler.engine().renderer().render_count();

        sender.try_send(StatusIntent::set_color(0, RED)).unwrap();
        let result = scheduler.poll(at(100));
        assert!(result.rendered);
        assert_eq!(scheduler.engine().renderer().render_count(), renders + 1);
        assert_eq!(
            scheduler.engine().renderer().last_frame(),
            Some(&[RED, RED][..])
        );
    }
}
