use crate::actions::{self, DeleteOutcome, DeleteTarget};
use crate::api::AdminApi;
use crate::config;
use crate::page::StatsPage;
use crate::ui::Ui;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

/// A deletion control on the statistics page. Per-student controls carry the
/// id of the student they act on; one singleton control wipes everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    DeleteStats { user_id: String },
    DeleteAll,
}

pub struct Console<U: Ui> {
    api: AdminApi,
    page: StatsPage,
    ui: U,
    controls: Vec<Control>,
}

impl<U: Ui> Console<U> {
    pub fn new(api: AdminApi, page: StatsPage, ui: U) -> Self {
        Self {
            api,
            page,
            ui,
            controls: vec![Control::DeleteAll],
        }
    }

    /// Binds one delete control per student shown on the current page.
    pub fn bind_delete_controls(&mut self, user_ids: impl IntoIterator<Item = String>) {
        self.controls
            .extend(user_ids.into_iter().map(|user_id| Control::DeleteStats { user_id }));
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn page(&self) -> &StatsPage {
        &self.page
    }

    /// Routes a control through the shared delete flow. A control and the
    /// matching standalone operation put the same bytes on the wire.
    pub async fn dispatch(&mut self, control: &Control) -> DeleteOutcome {
        let target = match control {
            Control::DeleteStats { user_id } => DeleteTarget::User(user_id.clone()),
            Control::DeleteAll => DeleteTarget::All,
        };
        actions::run_delete(&self.api, &mut self.page, &mut self.ui, &target).await
    }

    /// Triggers a previously bound control by position.
    pub async fn trigger(&mut self, index: usize) -> Option<DeleteOutcome> {
        let control = self.controls.get(index)?.clone();
        Some(self.dispatch(&control).await)
    }

    pub async fn run(&mut self) {
        print_help();
        let mut line = String::new();
        loop {
            print!("> ");
            let _ = io::stdout().flush();

            line.clear();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    error!("failed to read command: {err}");
                    break;
                }
            }

            let mut parts = line.split_whitespace();
            let Some(command) = parts.next() else {
                continue;
            };

            match command {
                "delete" => match parts.next() {
                    Some(user_id) => {
                        let control = Control::DeleteStats {
                            user_id: user_id.to_string(),
                        };
                        self.dispatch(&control).await;
                    }
                    None => println!("usage: delete <student-id>"),
                },
                "delete-all" => {
                    self.dispatch(&Control::DeleteAll).await;
                }
                "filter" => {
                    actions::update_unit_filter(&mut self.page, parts.next()).await;
                    println!("viewing {}", self.page.current_url());
                }
                "clear" => {
                    actions::update_unit_filter(&mut self.page, None).await;
                    println!("viewing {}", self.page.current_url());
                }
                "answer" => {
                    let (Some(user_id), Some(flag), Some(unit)) =
                        (parts.next(), parts.next(), parts.next())
                    else {
                        println!("usage: answer <student-id> <correct|wrong> <unit>");
                        continue;
                    };
                    let is_correct = match flag {
                        "correct" => true,
                        "wrong" => false,
                        other => {
                            println!("expected 'correct' or 'wrong', got '{other}'");
                            continue;
                        }
                    };
                    actions::submit_answer(&self.api, user_id, is_correct, unit).await;
                }
                "download" => self.download().await,
                "help" => print_help(),
                "quit" | "exit" => break,
                other => println!("unknown command: {other}"),
            }
        }
        info!("admin console closed");
    }

    async fn download(&mut self) {
        match actions::download_statistics(&self.page).await {
            Ok(bytes) => {
                let path = config::resolve_download_path();
                match tokio::fs::write(&path, &bytes).await {
                    Ok(()) => self
                        .ui
                        .alert(&format!("Statistics saved to {}", path.display())),
                    Err(err) => {
                        error!("failed to write statistics export: {err}");
                        self.ui.alert("An error occurred while downloading statistics.");
                    }
                }
            }
            Err(err) => {
                error!("statistics download failed: {err}");
                self.ui.alert("An error occurred while downloading statistics.");
            }
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  filter <student-id>   scope the statistics view to one student");
    println!("  clear                 show statistics for every student");
    println!("  delete <student-id>   delete one student's statistics");
    println!("  delete-all            delete statistics for every student");
    println!("  answer <student-id> <correct|wrong> <unit>   record an answer");
    println!("  download              save the statistics export");
    println!("  quit                  leave the console");
}
