use fltk::{
    app::Sender,
    button::Button,
    enums::Align,
    frame::Frame,
    group::Group,
    prelude::*,
};

use super::{caption, heading, PAGE_TOP, PAGE_WIDTH};
use crate::app::domain::messages::Message;

pub const WEBSITE_URL: &str = "https://www.tickdown.app";

/// Build the contact page
pub fn build_contact_page(sender: &Sender<Message>) -> Group {
    let mut page = Group::new(0, PAGE_TOP, PAGE_WIDTH, 520, None);

    heading(PAGE_TOP + 15, "Contact");

    let info_text = "TickDown is built by a tiny team that believes\n\
                     a timer should do one thing well.\n\n\
                     Email: hello@tickdown.app\n\
                     GitHub: github.com/tickdown/tickdown";
    let mut info_frame = Frame::default()
        .with_pos(15, PAGE_TOP + 70)
        .with_size(PAGE_WIDTH - 30, 120)
        .with_label(info_text);
    info_frame.set_label_size(12);
    info_frame.set_align(Align::Left | Align::Inside);

    let mut website_btn = Button::default()
        .with_pos(15, PAGE_TOP + 210)
        .with_size(140, 30)
        .with_label("Open Website");
    let sender = sender.clone();
    website_btn.set_callback(move |_| sender.send(Message::OpenLink(WEBSITE_URL)));

    caption(PAGE_TOP + 260, 25, "Opens in your default browser.");

    page.end();
    page
}
