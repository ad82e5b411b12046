use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use std::path::Path;

use intune_split::{
    fmt_inr, net_balance, open_app_toast, settlement_toast, BalanceStatus, Category, ExpenseForm,
    ExpenseStore, Field, Payer, QrSlot, ROOMMATE_ID,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Expenses,
    AddExpense,
    Payments,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Expenses => Page::AddExpense,
            Page::AddExpense => Page::Payments,
            Page::Payments => Page::Expenses,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Expenses => Page::Payments,
            Page::AddExpense => Page::Expenses,
            Page::Payments => Page::AddExpense,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Expenses => "Expenses",
            Page::AddExpense => "Add Expense",
            Page::Payments => "Payments",
        }
    }
}

/// In-progress QR path entry on the payments page.
#[derive(Debug, Clone)]
pub struct QrEntry {
    pub owner: Payer,
    pub path: String,
}

pub struct App {
    pub store: ExpenseStore,
    pub form: ExpenseForm,
    pub your_qr: QrSlot,
    pub roommate_qr: QrSlot,
    pub state: TableState,
    pub current_page: Page,
    pub show_detail: bool,
    pub qr_entry: Option<QrEntry>,
    pub toast: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            store: ExpenseStore::new(),
            form: ExpenseForm::new(),
            your_qr: QrSlot::new(Payer::You),
            roommate_qr: QrSlot::new(Payer::Roommate),
            state: TableState::default(),
            current_page: Page::Expenses,
            show_detail: false,
            qr_entry: None,
            toast: None,
        }
    }

    pub fn balance(&self) -> f64 {
        net_balance(&self.store)
    }

    pub fn balance_status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance())
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
        self.toast = None;
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
        self.toast = None;
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    /// Submit the entry form. Invalid drafts are a silent no-op; a valid
    /// one appends the record and moves selection to it.
    pub fn submit_form(&mut self) {
        if let Some(expense) = self.form.submit() {
            let toast = format!(
                "Expense added - {} split 50/50 with {}",
                fmt_inr(expense.amount),
                ROOMMATE_ID
            );
            self.store.add(expense);
            self.state.select(Some(0));
            self.toast = Some(toast);
        }
    }

    pub fn begin_qr_entry(&mut self, owner: Payer) {
        self.qr_entry = Some(QrEntry {
            owner,
            path: String::new(),
        });
    }

    /// Finish path entry and try the attach. A failed read or non-image
    /// path leaves the slot as it was, with no error surfaced.
    pub fn finish_qr_entry(&mut self) {
        if let Some(entry) = self.qr_entry.take() {
            let slot = match entry.owner {
                Payer::You => &mut self.your_qr,
                Payer::Roommate => &mut self.roommate_qr,
            };
            if slot.attach(Path::new(entry.path.trim())) {
                self.toast = Some(slot.uploaded_toast());
            }
        }
    }

    pub fn settle(&mut self) {
        self.toast = settlement_toast(&self.balance_status(), ROOMMATE_ID);
    }

    pub fn open_payment_app(&mut self, owner: Payer) {
        let slot = match owner {
            Payer::You => &self.your_qr,
            Payer::Roommate => &self.roommate_qr,
        };
        if slot.has_preview() {
            self.toast = Some(open_app_toast(owner, ROOMMATE_ID));
        }
    }

    pub fn next_row(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Path entry captures the keyboard until finished or cancelled
            if app.qr_entry.is_some() {
                match key.code {
                    KeyCode::Esc => app.qr_entry = None,
                    KeyCode::Enter => app.finish_qr_entry(),
                    KeyCode::Backspace => {
                        if let Some(entry) = app.qr_entry.as_mut() {
                            entry.path.pop();
                        }
                    }
                    KeyCode::Char(c) => {
                        if let Some(entry) = app.qr_entry.as_mut() {
                            entry.path.push(c);
                        }
                    }
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                _ => match app.current_page {
                    Page::Expenses => handle_expenses_key(app, key.code),
                    Page::AddExpense => handle_form_key(app, key.code),
                    Page::Payments => handle_payments_key(app, key.code),
                },
            }
        }
    }
}

fn handle_expenses_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => app.next_row(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_row(),
        KeyCode::Enter => app.toggle_detail(),
        KeyCode::Home => {
            if !app.store.is_empty() {
                app.state.select(Some(0));
            }
        }
        KeyCode::End => {
            if !app.store.is_empty() {
                app.state.select(Some(app.store.len() - 1));
            }
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Down => app.form.focus_next(),
        KeyCode::Up => app.form.focus_previous(),
        KeyCode::Right => {
            if app.form.focused == Field::Category {
                app.form.cycle_category();
            }
        }
        KeyCode::Left => {
            if app.form.focused == Field::Category {
                app.form.cycle_category_back();
            }
        }
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
}

fn handle_payments_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('p') | KeyCode::Enter => app.settle(),
        KeyCode::Char('y') => app.begin_qr_entry(Payer::You),
        KeyCode::Char('r') => app.begin_qr_entry(Payer::Roommate),
        KeyCode::Char('o') => app.open_payment_app(Payer::You),
        KeyCode::Char('m') => app.open_payment_app(Payer::Roommate),
        _ => {}
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Expenses => {
            if app.show_detail && !app.store.is_empty() {
                let content_chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(60), // Expense list
                        Constraint::Percentage(40), // Detail panel
                    ])
                    .split(chunks[1]);

                render_expense_table(f, content_chunks[0], app);
                render_detail_panel(f, content_chunks[1], app);
            } else {
                render_expense_table(f, chunks[1], app);
            }
        }
        Page::AddExpense => render_form(f, chunks[1], app),
        Page::Payments => render_payments(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = vec![
        (Page::Expenses, "Expenses"),
        (Page::AddExpense, "Add Expense"),
        (Page::Payments, "Payments"),
    ];

    let mut tab_spans = vec![
        Span::styled(
            "InTune",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for (i, (page, name)) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(*name, style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Split Expenses with {}", ROOMMATE_ID),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));

    let balance = app.balance();
    let balance_color = if balance > 0.0 {
        Color::Green
    } else if balance < 0.0 {
        Color::Red
    } else {
        Color::DarkGray
    };
    tab_spans.push(Span::styled(
        format!("Balance: {}", fmt_inr(balance)),
        Style::default().fg(balance_color),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Groceries => Color::Green,
        Category::Utilities => Color::Blue,
        Category::Rent => Color::Magenta,
        Category::Food => Color::LightRed,
        Category::Transport => Color::Yellow,
        Category::Entertainment => Color::LightMagenta,
        Category::Cleaning => Color::Cyan,
        Category::Other => Color::Gray,
    }
}

fn render_expense_table(f: &mut Frame, area: Rect, app: &mut App) {
    if app.store.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No expenses added yet.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "  Start by adding your first shared expense!",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Recent Expenses "),
        );
        f.render_widget(placeholder, area);
        return;
    }

    let share_header = format!("{}'s Share", ROOMMATE_ID);
    let header_titles = [
        "Date",
        "Description",
        "Category",
        "Paid By",
        "Amount",
        "Your Share",
        share_header.as_str(),
    ];
    let header_cells = header_titles
    .iter()
    .map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.store.iter().map(|expense| {
        let color = category_color(expense.category);

        let cells = vec![
            Cell::from(expense.date_label()),
            Cell::from(truncate(&expense.description, 28)),
            Cell::from(expense.category.label()).style(Style::default().fg(color)),
            Cell::from(expense.paid_by.label()),
            Cell::from(fmt_inr(expense.amount)).style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::from(fmt_inr(expense.your_share)),
            Cell::from(fmt_inr(expense.their_share)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(30),
            Constraint::Length(18),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Recent Expenses "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let expense = match app.state.selected().and_then(|i| app.store.iter().nth(i)) {
        Some(e) => e,
        None => {
            let no_selection = Paragraph::new("No expense selected").block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Expense Details "),
            );
            f.render_widget(no_selection, area);
            return;
        }
    };

    let bold_cyan = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Description: ", bold_cyan),
            Span::raw(&expense.description),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Category: ", bold_cyan),
            Span::styled(
                expense.category.label(),
                Style::default().fg(category_color(expense.category)),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Date: ", bold_cyan),
            Span::raw(expense.date_label()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Paid by: ", bold_cyan),
            Span::raw(expense.paid_by.label()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Amount: ", bold_cyan),
            Span::styled(
                fmt_inr(expense.amount),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Your share: ", bold_cyan),
            Span::raw(fmt_inr(expense.your_share)),
        ]),
        Line::from(vec![
            Span::styled(format!("  {}'s share: ", expense.split_with), bold_cyan),
            Span::raw(fmt_inr(expense.their_share)),
        ]),
    ];

    if let Some(notes) = &expense.notes {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled("  Notes: ", bold_cyan),
            Span::styled(
                notes.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Press Enter to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    let detail_panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Expense Details "),
    );

    f.render_widget(detail_panel, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let has_recent = !app.store.is_empty();
    let constraints = if has_recent {
        vec![Constraint::Length(14), Constraint::Min(0)]
    } else {
        vec![Constraint::Min(0)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let field_line = |field: Field, value: String| {
        let focused = app.form.focused == field;
        let marker = if focused { "→ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let value_span = if value.is_empty() {
            Span::styled(
                placeholder_for(field),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw(value)
        };
        Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<18}", field.title()), label_style),
            value_span,
        ])
    };

    let category_value = app
        .form
        .category
        .map(|c| c.label().to_string())
        .unwrap_or_default();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  ➕ Add New Expense",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line(Field::Amount, app.form.amount.clone()),
        Line::from(""),
        field_line(Field::Category, category_value),
        Line::from(""),
        field_line(Field::Description, app.form.description.clone()),
        Line::from(""),
        field_line(Field::Notes, app.form.notes.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "  ↑/↓ field  ←/→ category  Enter split expense",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let form = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Split an Expense "),
    );
    f.render_widget(form, chunks[0]);

    if has_recent {
        render_recent_preview(f, chunks[1], app);
    }
}

fn placeholder_for(field: Field) -> &'static str {
    match field {
        Field::Amount => "0.00",
        Field::Category => "←/→ to select category",
        Field::Description => "What was this expense for?",
        Field::Notes => "Additional details...",
    }
}

fn render_recent_preview(f: &mut Frame, area: Rect, app: &App) {
    let mut content = vec![Line::from("")];
    for expense in app.store.recent(3) {
        content.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate(&expense.description, 28),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                expense.category.label(),
                Style::default().fg(category_color(expense.category)),
            ),
            Span::raw("  "),
            Span::raw(fmt_inr(expense.amount)),
            Span::styled(
                format!("  ({} each)", fmt_inr(expense.your_share)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let preview = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Recent Expenses "),
    );
    f.render_widget(preview, area);
}

fn render_payments(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),  // Balance overview
            Constraint::Min(0),     // QR cards
            Constraint::Length(3),  // Path entry line
        ])
        .split(area);

    render_balance_overview(f, chunks[0], app);

    let qr_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_qr_card(f, qr_chunks[0], &app.your_qr, "Your Payment QR", 'y', 'o');
    let roommate_title = format!("{}'s Payment QR", ROOMMATE_ID);
    render_qr_card(f, qr_chunks[1], &app.roommate_qr, &roommate_title, 'r', 'm');

    render_qr_entry_line(f, chunks[2], app);
}

fn render_balance_overview(f: &mut Frame, area: Rect, app: &App) {
    let status = app.balance_status();

    let amount_line = Span::styled(
        fmt_inr(status.amount()),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let status_color = match status {
        BalanceStatus::RoommateOwesYou(_) => Color::Green,
        BalanceStatus::YouOweRoommate(_) => Color::Yellow,
        BalanceStatus::Settled => Color::DarkGray,
    };

    let mut content = vec![
        Line::from(""),
        Line::from(vec![Span::raw("  "), amount_line]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(status.summary(ROOMMATE_ID), Style::default().fg(status_color)),
        ]),
    ];

    if let Some(action) = status.action() {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("p", Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(action, Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }

    let overview = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Payment Overview "),
    );
    f.render_widget(overview, area);
}

fn render_qr_card(f: &mut Frame, area: Rect, slot: &QrSlot, title: &str, attach_key: char, open_key: char) {
    let mut content = vec![Line::from("")];

    match &slot.preview {
        Some(preview) => {
            content.push(Line::from(vec![
                Span::raw("  "),
                Span::styled("✓ QR Code uploaded", Style::default().fg(Color::Green)),
            ]));
            content.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{} ({} bytes)", preview.file_name, preview.bytes.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            content.push(Line::from(""));
            content.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(attach_key.to_string(), Style::default().fg(Color::Yellow)),
                Span::raw(" Change QR Code  "),
                Span::styled(open_key.to_string(), Style::default().fg(Color::Yellow)),
                Span::raw(" Open Payment App"),
            ]));
        }
        None => {
            content.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    "Upload a payment QR code",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]));
            content.push(Line::from(""));
            content.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(attach_key.to_string(), Style::default().fg(Color::Yellow)),
                Span::raw(" Upload QR Code"),
            ]));
        }
    }

    let card = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} ", title)),
    );
    f.render_widget(card, area);
}

fn render_qr_entry_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match &app.qr_entry {
        Some(entry) => Line::from(vec![
            Span::styled(
                format!(" Image path for {}: ", entry.owner.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(entry.path.clone()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        None => Line::from(Span::styled(
            " Image files only (png/jpg/jpeg/gif/bmp/webp/svg)",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let line = Paragraph::new(vec![content]).block(Block::default().borders(Borders::ALL));
    f.render_widget(line, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if let Some(toast) = &app.toast {
        status_spans.push(Span::styled(
            format!(" {} ", toast),
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw("| "));
    }

    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));

    match app.current_page {
        Page::Expenses => {
            status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Nav | "));
            status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Details | "));
        }
        Page::AddExpense => {
            status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Split Expense | "));
        }
        Page::Payments => {
            status_spans.push(Span::styled("p", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Settle | "));
            status_spans.push(Span::styled("y/r", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Upload QR | "));
        }
    }

    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
