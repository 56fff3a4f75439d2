use crate::app::event::ChatEvent;
use crate::irc::outbound::Outbound;

/// Side effect requested by the dispatcher, performed by the event loop in
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Send(Outbound),
    Show(ChatEvent),
}
