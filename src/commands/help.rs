pub fn render() -> String {
    "📖 PayWise commands\n\
     `$open <path>`            go to /, /home, /transfer, /history or /transaction/<id>\n\
     `$home [show|hide]`       dashboard; show or hide the balance\n\
     `$transfer [sub]`         transfer wizard: contacts, pick, tag, amount, quick, memo, pin, next, back, send, cancel\n\
     `$history [sub]`          history: show [page], next, prev, type, status, range, category, search, clear, reload\n\
     `$tx <id> [receipt|json]` transaction detail\n\
     `$help`                   this message\n\
     `$quit`                   leave"
        .to_string()
}

/// Landing page shown at `/`
pub fn render_landing() -> String {
    "💚 Welcome to PayWise\n\
     Send money to anyone with a PayTag. This is a demo: all data is mock data and no money moves.\n\
     Get started with `$open /home` or type `$help`."
        .to_string()
}
