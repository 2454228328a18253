use common::form::Field;
use common::latest::Ticket;
use common::model::attachment::Attachment;
use common::workflow::{Outcome, Suggestions};

pub enum Msg {
    Edit(Field, String),
    SuggestionsLoaded(Ticket, Suggestions),
    PickSuggestion(String),
    ClearSuggestions,
    OpenFilePicker,
    FileChosen(web_sys::File),
    FileLoaded(Attachment),
    FileReadFailed(String),
    Search,
    SearchFinished(Ticket, Outcome),
    Preview,
    Submit,
    ConfirmUpdate,
    Delete,
    /// A mutation finished; the label names it in diagnostics.
    Finished(&'static str, Outcome),
    Reset,
}
