use super::super::super::messages::Message;
use super::super::super::state::{App, PAGE_SCROLL_ID};
use super::super::Effect;
use crate::autoscroll::StopReason;
use crate::print::print_resume;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::touch;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use std::path::PathBuf;
use tracing::info;

/// Pixels per wheel "line" when the platform reports line deltas.
const WHEEL_LINE_PX: f32 = 40.0;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTo(y) => {
                scrollable::scroll_to(PAGE_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y })
            }
            Effect::PrintResume => {
                let resume = self.resume.clone();
                let cache_dir = PathBuf::from(&self.config.cache_dir);
                let command = self.config.print_command.clone();
                info!(command = %command, "Dispatching print task");
                Task::perform(
                    async move {
                        match print_resume(&resume, &cache_dir, &command) {
                            Ok(path) => Message::PrintFinished {
                                path: Some(path),
                                error: None,
                            },
                            Err(err) => Message::PrintFinished {
                                path: None,
                                error: Some(format!("{err:#}")),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::QuitSafely => {
                self.ui.pending_launch_at = None;
                self.scroller.stop(StopReason::Teardown);
                info!("Quitting");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // The scrollable captures wheel and touch input, but the auto-scroll
    // controller still has to see it.
    match &event {
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            return Some(Message::TouchStarted { y: position.y });
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            return Some(Message::TouchMoved { y: position.y });
        }
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            let delta_y = match delta {
                mouse::ScrollDelta::Lines { y, .. } => y * WHEEL_LINE_PX,
                mouse::ScrollDelta::Pixels { y, .. } => *y,
            };
            return Some(Message::WheelScrolled { delta_y });
        }
        _ => {}
    }

    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn window_id() -> window::Id {
        window::Id::unique()
    }

    #[test]
    fn captured_wheel_still_reaches_the_controller() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        });
        let message = runtime_event_to_message(event, event::Status::Captured, window_id());
        assert!(matches!(
            message,
            Some(Message::WheelScrolled { delta_y }) if delta_y == -WHEEL_LINE_PX
        ));
    }

    #[test]
    fn touch_events_carry_vertical_position() {
        let event = Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(1),
            position: Point::new(10.0, 240.0),
        });
        let message = runtime_event_to_message(event, event::Status::Captured, window_id());
        assert!(matches!(message, Some(Message::TouchMoved { y }) if y == 240.0));
    }
}
