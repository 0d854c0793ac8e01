use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};

use super::App;
use crate::event::Event;

/// Watch the links override file from a helper thread and signal changes over
/// an mpsc channel; the step loop drains the channel on its own tick, so the
/// subsystems stay single-threaded.
pub(super) fn spawn_links_watcher(path: PathBuf) -> Receiver<()> {
    let (tx, rx) = channel::<()>();
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        if let Ok(mut watcher) =
            notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    match event.kind {
                        EventKind::Modify(_)
                        | EventKind::Create(_)
                        | EventKind::Remove(_)
                        | EventKind::Any => {
                            let _ = tx.send(());
                        }
                        _ => {}
                    }
                }
            })
        {
            let _ = watcher.watch(path.as_path(), RecursiveMode::NonRecursive);
            loop {
                std::thread::sleep(std::time::Duration::from_secs(3600));
            }
        }
    });
    rx
}

impl App {
    pub(super) fn process_links_file_events(&mut self) {
        let Some(rx) = &self.links_event_rx else {
            return;
        };
        let mut changed = false;
        for _ in rx.try_iter() {
            changed = true;
        }
        if changed {
            self.queue.emit_now(Event::LinksFileChanged);
        }
    }
}
