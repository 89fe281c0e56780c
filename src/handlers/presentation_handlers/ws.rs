use actix_web::{web, HttpRequest, HttpResponse};
use actix_ws::Message;
use askama::Template;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::models::slide::Deck;
use crate::presentation::keys::prevent_default_keys;
use crate::presentation::protocol::{ClientEvent, ClientMessage, Frame, ServerMessage};
use crate::presentation::{
    Controller, FullScreen, FullScreenError, IntervalTicker, Notice, PresentationState, Shell,
    Ticker, Tick,
};
use crate::templates_structs::SlideFragment;

use super::StartQuery;

/// Browser side of one presentation socket: full-screen requests,
/// navigation and notices are queued as outgoing messages.
#[derive(Debug, Clone)]
pub struct SocketPort {
    outgoing: mpsc::UnboundedSender<ServerMessage>,
}

impl SocketPort {
    pub fn new(outgoing: mpsc::UnboundedSender<ServerMessage>) -> Self {
        Self { outgoing }
    }

    fn send(&self, msg: ServerMessage) -> Result<(), FullScreenError> {
        self.outgoing.send(msg).map_err(|_| FullScreenError::Unavailable)
    }
}

impl FullScreen for SocketPort {
    fn request_enter(&mut self) -> Result<(), FullScreenError> {
        self.send(ServerMessage::RequestFullScreen)
    }

    fn request_exit(&mut self) -> Result<(), FullScreenError> {
        self.send(ServerMessage::ExitFullScreen)
    }
}

impl Shell for SocketPort {
    fn navigate(&mut self, route: &str) {
        if self.send(ServerMessage::Navigate { to: route.to_string() }).is_err() {
            log::debug!("Presentation socket closed before navigating to {route}");
        }
    }

    fn notify(&mut self, notice: Notice) {
        let Notice { level, message } = notice;
        if self.send(ServerMessage::Notice { level, message }).is_err() {
            log::debug!("Presentation socket closed before a notice could be shown");
        }
    }
}

/// Apply one client message to the controller.
pub fn dispatch<F, T, S>(controller: &mut Controller<F, T, S>, text: &str)
where
    F: FullScreen,
    T: Ticker,
    S: Shell,
{
    let msg = match serde_json::from_str::<ClientMessage>(text) {
        Ok(msg) => msg,
        Err(e) => {
            log::warn!("Ignoring malformed presentation message: {e}");
            return;
        }
    };

    match ClientEvent::from(msg) {
        ClientEvent::Key(key) => {
            controller.handle_key(key);
        }
        ClientEvent::Command(command) => controller.apply(command),
        ClientEvent::FullScreenChanged(active) => controller.full_screen_changed(active),
        ClientEvent::FullScreenFailed(error) => controller.full_screen_failed(error),
        ClientEvent::Ignored => log::trace!("Ignoring unmapped key"),
    }
}

/// Render the current slide into a frame message.
pub fn frame<F, T, S>(controller: &Controller<F, T, S>) -> Result<ServerMessage, askama::Error>
where
    F: FullScreen,
    T: Ticker,
    S: Shell,
{
    let view = controller.render();
    let html = SlideFragment { view: &view }.render()?;
    let state = controller.state();

    Ok(ServerMessage::Frame(Frame {
        index: state.current_index,
        total: controller.total(),
        percent: controller.progress_percent(),
        is_auto_play: state.is_auto_play,
        is_full_screen: state.is_full_screen,
        html,
    }))
}

/// GET /presentation/ws?start=N - one controller per socket.
pub async fn connect(
    req: HttpRequest,
    body: web::Payload,
    config: web::Data<AppConfig>,
    deck: web::Data<Deck>,
    query: web::Query<StartQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, mut ws_session, mut msg_stream) = actix_ws::handle(&req, body)?;

    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<ServerMessage>();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<Tick>();

    let port = SocketPort::new(out_tx);
    let mut controller = Controller::new(
        deck.get_ref().clone(),
        config.autoplay_period,
        port.clone(),
        IntervalTicker::new(tick_tx),
        port,
    );
    controller.jump_to(query.index());

    actix_web::rt::spawn(async move {
        log::debug!("Presentation session opened at slide {}", controller.state().current_index);

        let hello = ServerMessage::Hello {
            total: controller.total(),
            prevent_default: prevent_default_keys(),
        };
        if ws_session.text(hello.to_json()).await.is_err() {
            return;
        }

        let mut shown: Option<PresentationState> = None;
        loop {
            if shown != Some(controller.state()) {
                match frame(&controller) {
                    Ok(msg) => {
                        if ws_session.text(msg.to_json()).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => log::error!("Failed to render slide frame: {e}"),
                }
                shown = Some(controller.state());
            }

            tokio::select! {
                Some(msg) = out_rx.recv() => {
                    if ws_session.text(msg.to_json()).await.is_err() {
                        break;
                    }
                }
                Some(tick) = tick_rx.recv() => controller.tick(tick.generation),
                msg = msg_stream.recv() => match msg {
                    Some(Ok(Message::Text(text))) => dispatch(&mut controller, &text),
                    Some(Ok(Message::Ping(bytes))) => {
                        if ws_session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        log::debug!("Presentation socket error: {e}");
                        break;
                    }
                },
            }
        }

        // dropping the controller cancels its auto-play timer
        drop(controller);
        let _ = ws_session.close(None).await;
        log::debug!("Presentation session closed");
    });

    Ok(response)
}
