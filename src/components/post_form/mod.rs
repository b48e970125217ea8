mod action;
mod gate;
mod reducer;
mod state;
mod tags;
mod view;

pub use action::PostFormAction;
pub use state::{Draft, Field, Mode, State};

pub use reducer::{reduce, Submitted, ViewStore};

pub use view::PostFormView;

pub struct PostFormReducer;
use navicula::reducer::Reducer;

impl Reducer for PostFormReducer {
    type Message = PostFormAction;

    type DelegateMessage = PostFormAction;

    type Action = PostFormAction;

    type State = state::State;

    type Environment = crate::environment::Environment;

    fn reduce<'a, 'b>(
        context: &'a impl navicula::types::MessageContext<
            Self::Action,
            Self::DelegateMessage,
            Self::Message,
        >,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> navicula::effect::Effect<'b, Self::Action> {
        reducer::reduce(context, action, state, environment)
    }

    fn initial_action() -> Option<Self::Action> {
        Some(PostFormAction::Mount)
    }
}
