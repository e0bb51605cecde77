mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, FRAME_INTERVAL};
use iced::event;
use iced::time;
use iced::{Subscription, Task};

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime::runtime_event_to_message)];

        if app.scroller.is_running() {
            subscriptions
                .push(time::every(app.scroller.settings().interval).map(Message::AutoScrollTick));
        }
        if app.needs_frames() {
            subscriptions.push(time::every(FRAME_INTERVAL).map(Message::FrameTick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
