use mockall::{predicate, Sequence as CallOrder};

use crate::{error::MockErrorHandler, exec::MockExecute, shell::MockShell};

use super::*;

/// Constructs a mock shell that yields each line in order, followed by no more input.
fn shell_with_lines(lines: &[&str]) -> MockShell {
    let mut lines: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
    lines.reverse();

    let mut mock_shell = MockShell::new();
    mock_shell.expect_is_interactive().return_const(false);
    mock_shell
        .expect_prompt_line()
        .returning(move |_| match lines.pop() {
            Some(line) => ShellInput::Line(line),
            None => ShellInput::None,
        });
    mock_shell
}

#[test]
fn shell_logout() {
    let mut mock_shell = MockShell::new();
    mock_shell.expect_is_interactive().return_const(true);
    mock_shell
        .expect_prompt_line()
        .with(predicate::eq("$ "))
        .times(1)
        .returning(|_| ShellInput::Logout);
    mock_shell.expect_save_history().times(1).return_const(());

    let mut executor = MockExecute::new();
    executor.expect_execute().never();
    let error_handler = MockErrorHandler::new();

    let status = run_shell(
        Box::new(mock_shell),
        &executor,
        &error_handler,
        "$ ",
        Some(std::path::Path::new("history.txt")),
    );

    assert_eq!(status, status::SUCCESS);
}

#[test]
fn shell_interrupt() {
    let mut counter = 0;
    let mut mock_shell = MockShell::new();
    mock_shell.expect_is_interactive().return_const(true);
    mock_shell
        .expect_prompt_line()
        .times(2)
        .returning(move |_| {
            counter += 1;
            if counter != 1 {
                ShellInput::Logout
            } else {
                ShellInput::Interrupt
            }
        });

    let mut executor = MockExecute::new();
    executor.expect_execute().never();

    let status = run_shell(
        Box::new(mock_shell),
        &executor,
        &MockErrorHandler::new(),
        "$ ",
        None,
    );

    assert_eq!(status, status::SUCCESS);
}

#[test]
fn shell_executes_parsed_lines() {
    let mut mock_shell = shell_with_lines(&["echo a; echo b\n", "   \n", "ls | wc\n"]);
    mock_shell
        .expect_add_history_entry()
        .with(predicate::eq("echo a; echo b"))
        .times(1)
        .return_const(());
    mock_shell
        .expect_add_history_entry()
        .with(predicate::eq("ls | wc"))
        .times(1)
        .return_const(());

    let mut order = CallOrder::new();
    let mut executor = MockExecute::new();
    executor
        .expect_execute()
        .withf(|sequence, last_status| sequence.pipelines.len() == 2 && *last_status == 0)
        .times(1)
        .in_sequence(&mut order)
        .returning(|_, _| ExecOutcome::Continue(4));
    executor
        .expect_execute()
        .withf(|sequence, last_status| {
            sequence.pipelines[0].commands.len() == 2 && *last_status == 4
        })
        .times(1)
        .in_sequence(&mut order)
        .returning(|_, _| ExecOutcome::Continue(5));

    let status = run_shell(
        Box::new(mock_shell),
        &executor,
        &MockErrorHandler::new(),
        "$ ",
        None,
    );

    assert_eq!(status, 5);
}

#[test]
fn shell_displays_parse_errors_and_continues() {
    let mut mock_shell = shell_with_lines(&["a | | b\n", "echo ok\n"]);
    mock_shell.expect_add_history_entry().return_const(());

    let mut error_handler = MockErrorHandler::new();
    error_handler
        .expect_display_error()
        .withf(|line, error| line.trim() == "a | | b" && error.position() == 4)
        .times(1)
        .return_const(());

    let mut executor = MockExecute::new();
    executor
        .expect_execute()
        .withf(|_, last_status| *last_status == status::GENERAL_ERROR)
        .times(1)
        .returning(|_, _| ExecOutcome::Continue(status::SUCCESS));

    let status = run_shell(Box::new(mock_shell), &executor, &error_handler, "", None);

    assert_eq!(status, status::SUCCESS);
}

#[test]
fn shell_exits_on_request() {
    let mut mock_shell = MockShell::new();
    mock_shell.expect_is_interactive().return_const(false);
    mock_shell
        .expect_prompt_line()
        .with(predicate::eq(""))
        .times(1)
        .returning(|_| ShellInput::Line("exit\n".into()));
    mock_shell.expect_add_history_entry().return_const(());

    let mut executor = MockExecute::new();
    executor
        .expect_execute()
        .times(1)
        .returning(|_, _| ExecOutcome::Exit(7));

    let status = run_shell(
        Box::new(mock_shell),
        &executor,
        &MockErrorHandler::new(),
        "$ ",
        None,
    );

    assert_eq!(status, 7);
}
