//! 终端进入 / 退出原始模式

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 进入原始模式和备用屏幕
///
/// 同时安装 panic hook：panic 时先恢复终端再打印信息，否则信息会被备用屏幕吞掉。
pub fn init_terminal() -> Result<Term> {
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;

    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        leave_screen();
        previous(info);
    }));

    Terminal::new(CrosstermBackend::new(io::stdout())).context("failed to create terminal")
}

/// 恢复终端；正常退出和出错退出都要调用
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// panic hook 中使用，尽力而为
fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}
