// ============================================================================
// VÍDEOS DE PROYECTOS - .project__media > video
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;

use crate::dom::element::{query_selector_all, query_selector_in};
use crate::dom::events::{on, Listeners};
use crate::utils::constants::PROJECT_MEDIA_SELECTOR;
use crate::viewmodels::{HoverMedia, VideoCommand, MEDIA_EVENTS};

struct ProjectVideo(HtmlVideoElement);

impl HoverMedia for ProjectVideo {
    fn rewind(&self) {
        self.0.set_current_time(0.0);
    }

    fn ready_state(&self) -> u16 {
        self.0.ready_state()
    }

    fn reload(&self) {
        self.0.load();
    }

    fn request_play(&self) {
        match self.0.play() {
            Ok(promise) => spawn_local(async move {
                // Autoplay bloqueado o play interrumpido por un pause: se ignora
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("🎬 [VIDEO] play() rechazado: {:?}", e);
                }
            }),
            Err(e) => log::debug!("🎬 [VIDEO] play() falló: {:?}", e),
        }
    }

    fn pause(&self) {
        let _ = self.0.pause();
    }
}

pub struct ProjectVideos {
    _listeners: Listeners,
}

impl ProjectVideos {
    pub fn mount() -> Result<Option<Self>, JsValue> {
        let blocks = query_selector_all(PROJECT_MEDIA_SELECTOR)?;
        if blocks.is_empty() {
            return Ok(None);
        }

        let mut listeners = Listeners::new();
        let mut videos = 0;

        for block in &blocks {
            let Some(video) = query_selector_in(block, "video")
                .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
            else {
                continue;
            };
            video.set_muted(true);
            video.set_attribute("playsinline", "")?;
            let media = Rc::new(ProjectVideo(video));

            for event_type in MEDIA_EVENTS {
                let Some(command) = VideoCommand::for_event(event_type) else {
                    continue;
                };
                let media = Rc::clone(&media);
                listeners.push(on(block, event_type, move |_| command.run(&*media)));
            }
            videos += 1;
        }

        log::debug!("🎬 [VIDEO] {} vídeos de proyecto enlazados", videos);
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
