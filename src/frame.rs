use crate::render::{self, Layer};
use crate::show::Show;
use crate::view::View;
use prank_core::AmbientField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub show: Rc<RefCell<Show>>,
    pub ambient: Rc<RefCell<AmbientField>>,
    pub ambient_layer: Layer,
    pub confetti_layer: Layer,
    pub view: View,
    /// Whether the confetti canvas holds pixels from the previous frame.
    pub confetti_dirty: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut show = self.show.borrow_mut();
        show.advance();

        {
            let mut ambient = self.ambient.borrow_mut();
            ambient.step();
            render::draw_ambient(&self.ambient_layer, &ambient);
        }

        let confetti = show.director.confetti_mut();
        if confetti.is_animating() {
            confetti.step();
            render::draw_confetti(&self.confetti_layer, confetti);
            self.confetti_dirty = true;
        } else if self.confetti_dirty {
            self.confetti_layer.clear();
            self.confetti_dirty = false;
        }

        self.view.sync(show.director.stage());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
