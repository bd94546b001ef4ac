use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::renderer::Renderer;
use crate::gui::window::{self, GtkScheduler};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub struct AppInit {
    pub config: Config,
    pub config_path: PathBuf,
    pub windowed: bool,
    pub events: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub renderer: Rc<RefCell<Renderer<GtkScheduler>>>,
    pub config_path: PathBuf,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Tap,
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Line Arcs"),
            set_decorated: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,

                add_controller = gtk::GestureClick {
                    set_button: 0, // any button counts as a tap
                    connect_pressed[sender] => move |_, _, _, _| {
                        sender.input(AppMsg::Tap);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            config_path,
            windowed,
            events,
        } = init;

        window::init_window(&root, windowed);

        let model = AppModel {
            renderer: Rc::new(RefCell::new(Renderer::new(
                config,
                GtkScheduler::default(),
            ))),
            config_path,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model
            .renderer
            .borrow()
            .scheduler()
            .attach(&model.drawing_area);

        let renderer = model.renderer.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                if let Err(e) = renderer
                    .borrow_mut()
                    .render(cr, width as f64, height as f64)
                {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tap => {
                if !self.renderer.borrow_mut().handle_tap() {
                    log::debug!("Tap ignored, a sweep is already running");
                }
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    let scheduler = self.renderer.borrow().scheduler().clone();
                    *self.renderer.borrow_mut() = Renderer::new(new_config, scheduler);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }
}
