//! Certificate form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and browser glue.
//!
//! Responsibilities
//! - Re-export the component and its `Msg`/props types.
//! - Delegate `update` and `view` to their modules.
//! - Attach the outside-click listener that closes course suggestions, and
//!   release it together with the preview object URL on destroy.

mod helpers;
mod http;
mod messages;
mod outside_click;
mod props;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use props::CertificateFormProps;
pub use state::CertificateFormComponent;

use http::HttpStudentApi;
use outside_click::OutsideClickListener;

impl Component for CertificateFormComponent {
    type Message = Msg;
    type Properties = CertificateFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = CertificateFormComponent::new(ctx.props().config.clone());
        component.outside_click = OutsideClickListener::attach(
            component.course_ref.clone(),
            ctx.link().callback(|_| Msg::ClearSuggestions),
        );
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().config != old_props.config {
            self.api = HttpStudentApi::new(ctx.props().config.clone());
            return true;
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.outside_click = None;
        self.preview = None;
    }
}
