// ============================================================================
// VIDEO VIEWMODEL - Reproducción al pasar por encima de un proyecto
// ============================================================================
// Sin cola: cada evento emite el último comando y el propio <video>
// serializa play/pause solapados.
// ============================================================================

/// `HTMLMediaElement.HAVE_CURRENT_DATA`
pub const HAVE_CURRENT_DATA: u16 = 2;

/// Eventos que escucha cada bloque `.project__media`.
/// En táctil no hay hover: `touchend` inicia la reproducción.
pub const MEDIA_EVENTS: [&str; 5] = ["mouseenter", "mouseleave", "focusin", "focusout", "touchend"];

/// Operaciones de un elemento multimedia que usa el controlador
pub trait HoverMedia {
    fn rewind(&self);
    fn ready_state(&self) -> u16;
    fn reload(&self);
    /// Pide reproducir; un rechazo (política de autoplay) se descarta
    fn request_play(&self);
    fn pause(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCommand {
    Play,
    Stop,
}

impl VideoCommand {
    /// Eventos DOM que disparan cada comando
    pub fn for_event(event_type: &str) -> Option<Self> {
        match event_type {
            "mouseenter" | "focusin" | "touchend" => Some(VideoCommand::Play),
            "mouseleave" | "focusout" => Some(VideoCommand::Stop),
            _ => None,
        }
    }

    pub fn run<M: HoverMedia + ?Sized>(self, media: &M) {
        match self {
            VideoCommand::Play => {
                media.rewind();
                if media.ready_state() < HAVE_CURRENT_DATA {
                    media.reload();
                }
                media.request_play();
            }
            VideoCommand::Stop => {
                media.pause();
                media.rewind();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeMedia {
        ready_state: u16,
        calls: RefCell<Vec<&'static str>>,
    }

    impl FakeMedia {
        fn new(ready_state: u16) -> Self {
            Self {
                ready_state,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl HoverMedia for FakeMedia {
        fn rewind(&self) {
            self.calls.borrow_mut().push("rewind");
        }
        fn ready_state(&self) -> u16 {
            self.ready_state
        }
        fn reload(&self) {
            self.calls.borrow_mut().push("load");
        }
        fn request_play(&self) {
            self.calls.borrow_mut().push("play");
        }
        fn pause(&self) {
            self.calls.borrow_mut().push("pause");
        }
    }

    #[test]
    fn enter_events_map_to_play_and_leave_events_to_stop() {
        for event in ["mouseenter", "focusin", "touchend"] {
            assert_eq!(VideoCommand::for_event(event), Some(VideoCommand::Play));
        }
        for event in ["mouseleave", "focusout"] {
            assert_eq!(VideoCommand::for_event(event), Some(VideoCommand::Stop));
        }
        assert_eq!(VideoCommand::for_event("click"), None);
    }

    #[test]
    fn every_listened_event_has_a_command() {
        let plays = MEDIA_EVENTS
            .iter()
            .filter_map(|event| VideoCommand::for_event(event))
            .filter(|command| *command == VideoCommand::Play)
            .count();
        assert!(MEDIA_EVENTS.iter().all(|event| VideoCommand::for_event(event).is_some()));
        assert!(MEDIA_EVENTS.contains(&"touchend"));
        assert_eq!(plays, 3);
    }

    #[test]
    fn play_rewinds_before_playing() {
        let media = FakeMedia::new(4);
        VideoCommand::Play.run(&media);
        assert_eq!(*media.calls.borrow(), vec!["rewind", "play"]);
    }

    #[test]
    fn play_reloads_when_no_data_is_buffered() {
        let media = FakeMedia::new(1);
        VideoCommand::Play.run(&media);
        assert_eq!(*media.calls.borrow(), vec!["rewind", "load", "play"]);
    }

    #[test]
    fn stop_pauses_then_rewinds() {
        let media = FakeMedia::new(4);
        VideoCommand::Stop.run(&media);
        assert_eq!(*media.calls.borrow(), vec!["pause", "rewind"]);
    }

    #[test]
    fn rapid_enter_leave_issues_each_command_in_order() {
        let media = FakeMedia::new(4);
        VideoCommand::Play.run(&media);
        VideoCommand::Stop.run(&media);
        VideoCommand::Play.run(&media);
        assert_eq!(
            *media.calls.borrow(),
            vec!["rewind", "play", "pause", "rewind", "rewind", "play"]
        );
    }
}
