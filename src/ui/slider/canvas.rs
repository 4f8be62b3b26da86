// SPDX-License-Identifier: MPL-2.0
//! Transparent canvas layered over the composited surface to capture
//! press, move and release from the mouse and, optionally, the first finger.

use super::component::Message;
use iced::widget::canvas::{self, Geometry};
use iced::widget::Action;
use iced::{mouse, touch, Event, Point, Rectangle, Renderer, Theme};

/// Horizontal pointer input, relative to the surface's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Press { x: f32 },
    Move { x: f32 },
    Release { x: f32 },
    /// The finger driving the gesture disappeared without lifting.
    Lost,
}

/// Which device owns the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// `last_x` is the most recent x published for this gesture.
    Mouse { last_x: f32 },
    Finger(touch::Finger),
}

/// Input capture program for the slider surface.
#[derive(Debug, Clone, Copy)]
pub struct InputLayer {
    pub touch_enabled: bool,
}

fn relative_x(position: Point, bounds: Rectangle) -> f32 {
    position.x - bounds.x
}

fn publish(input: PointerInput) -> Option<Action<Message>> {
    Some(Action::publish(Message::Pointer(input)).and_capture())
}

impl canvas::Program<Message> for InputLayer {
    type State = Gesture;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if *state != Gesture::Idle {
                    return None;
                }
                // Presses off the surface never start a gesture.
                let position = cursor.position_in(bounds)?;
                *state = Gesture::Mouse { last_x: position.x };
                publish(PointerInput::Press { x: position.x })
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let Gesture::Mouse { last_x } = state else {
                    return None;
                };
                let x = relative_x(*position, bounds);
                *last_x = x;
                publish(PointerInput::Move { x })
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let Gesture::Mouse { last_x } = *state else {
                    return None;
                };
                *state = Gesture::Idle;
                // Without a cursor (left the window), release where it was last seen.
                let x = cursor
                    .position()
                    .map_or(last_x, |position| relative_x(position, bounds));
                publish(PointerInput::Release { x })
            }
            Event::Touch(touch_event) if self.touch_enabled => {
                self.update_touch(state, touch_event, bounds)
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match state {
            Gesture::Mouse { .. } => mouse::Interaction::Grabbing,
            _ if cursor.is_over(bounds) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}

impl InputLayer {
    fn update_touch(
        &self,
        state: &mut Gesture,
        event: &touch::Event,
        bounds: Rectangle,
    ) -> Option<Action<Message>> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                if *state != Gesture::Idle || !bounds.contains(position) {
                    return None;
                }
                *state = Gesture::Finger(id);
                publish(PointerInput::Press {
                    x: relative_x(position, bounds),
                })
            }
            touch::Event::FingerMoved { id, position } => {
                if *state != Gesture::Finger(id) {
                    return None;
                }
                publish(PointerInput::Move {
                    x: relative_x(position, bounds),
                })
            }
            touch::Event::FingerLifted { id, position } => {
                if *state != Gesture::Finger(id) {
                    return None;
                }
                *state = Gesture::Idle;
                publish(PointerInput::Release {
                    x: relative_x(position, bounds),
                })
            }
            touch::Event::FingerLost { id, .. } => {
                if *state != Gesture::Finger(id) {
                    return None;
                }
                *state = Gesture::Idle;
                publish(PointerInput::Lost)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::canvas::Program;

    const BOUNDS: Rectangle = Rectangle {
        x: 100.0,
        y: 50.0,
        width: 640.0,
        height: 400.0,
    };

    fn layer(touch_enabled: bool) -> InputLayer {
        InputLayer { touch_enabled }
    }

    fn mouse_event(event: mouse::Event) -> Event {
        Event::Mouse(event)
    }

    #[test]
    fn press_outside_bounds_is_ignored() {
        let mut state = Gesture::Idle;
        let action = layer(true).update(
            &mut state,
            &mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(10.0, 10.0)),
        );
        assert!(action.is_none());
        assert_eq!(state, Gesture::Idle);
    }

    #[test]
    fn mouse_gesture_tracks_state() {
        let mut state = Gesture::Idle;
        let input = layer(true);
        let inside = mouse::Cursor::Available(Point::new(400.0, 100.0));

        let moved = input.update(
            &mut state,
            &mouse_event(mouse::Event::CursorMoved {
                position: Point::new(300.0, 100.0),
            }),
            BOUNDS,
            inside,
        );
        assert!(moved.is_none(), "moves are not published before a press");

        assert!(input
            .update(
                &mut state,
                &mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)),
                BOUNDS,
                inside,
            )
            .is_some());
        assert_eq!(state, Gesture::Mouse { last_x: 300.0 });

        assert!(input
            .update(
                &mut state,
                &mouse_event(mouse::Event::ButtonReleased(mouse::Button::Left)),
                BOUNDS,
                inside,
            )
            .is_some());
        assert_eq!(state, Gesture::Idle);
    }

    fn published(action: Option<Action<Message>>) -> Option<PointerInput> {
        match action?.into_inner() {
            (Some(Message::Pointer(input)), _, _) => Some(input),
            _ => None,
        }
    }

    #[test]
    fn release_without_cursor_uses_last_seen_position() {
        let mut state = Gesture::Idle;
        let input = layer(true);

        input.update(
            &mut state,
            &mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(700.0, 100.0)),
        );
        let moved = input.update(
            &mut state,
            &mouse_event(mouse::Event::CursorMoved {
                position: Point::new(690.0, 100.0),
            }),
            BOUNDS,
            mouse::Cursor::Available(Point::new(690.0, 100.0)),
        );
        assert_eq!(published(moved), Some(PointerInput::Move { x: 590.0 }));

        let released = input.update(
            &mut state,
            &mouse_event(mouse::Event::ButtonReleased(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Unavailable,
        );
        assert_eq!(published(released), Some(PointerInput::Release { x: 590.0 }));
        assert_eq!(state, Gesture::Idle);
    }

    #[test]
    fn touch_is_ignored_when_disabled() {
        let mut state = Gesture::Idle;
        let action = layer(false).update(
            &mut state,
            &Event::Touch(touch::Event::FingerPressed {
                id: touch::Finger(1),
                position: Point::new(200.0, 100.0),
            }),
            BOUNDS,
            mouse::Cursor::Unavailable,
        );
        assert!(action.is_none());
        assert_eq!(state, Gesture::Idle);
    }

    #[test]
    fn only_the_first_finger_drives_the_gesture() {
        let mut state = Gesture::Idle;
        let input = layer(true);
        let press = |id| {
            Event::Touch(touch::Event::FingerPressed {
                id: touch::Finger(id),
                position: Point::new(200.0, 100.0),
            })
        };

        assert!(input
            .update(&mut state, &press(1), BOUNDS, mouse::Cursor::Unavailable)
            .is_some());
        assert!(input
            .update(&mut state, &press(2), BOUNDS, mouse::Cursor::Unavailable)
            .is_none());

        let lifted_other = Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(2),
            position: Point::new(250.0, 100.0),
        });
        assert!(input
            .update(&mut state, &lifted_other, BOUNDS, mouse::Cursor::Unavailable)
            .is_none());
        assert_eq!(state, Gesture::Finger(touch::Finger(1)));
    }

    #[test]
    fn relative_coordinates_subtract_bounds_origin() {
        assert!((relative_x(Point::new(150.0, 0.0), BOUNDS) - 50.0).abs() < f32::EPSILON);
    }
}
