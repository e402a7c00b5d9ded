use std::io::Cursor;

use calcmedias::{
    GradingConfig, Session,
    shell::{Command, Shell},
};

fn run(script: &str) -> (Session, String) {
    let mut output = Vec::new();
    let mut shell = Shell::new(
        Session::new(GradingConfig::default()),
        Cursor::new(script.as_bytes().to_vec()),
        &mut output,
    );
    shell.run().expect("shell runs");
    let session = shell.into_session();
    (session, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn commands_parse_with_aliases() {
    assert_eq!(Command::parse("add"), Command::Add);
    assert_eq!(Command::parse("  LIST "), Command::List);
    assert_eq!(Command::parse("rm 2"), Command::Remove("2".into()));
    assert_eq!(Command::parse("remove"), Command::Remove(String::new()));
    assert_eq!(Command::parse("q"), Command::Quit);
    assert_eq!(Command::parse(""), Command::Empty);
    assert_eq!(Command::parse("dance"), Command::Unknown("dance".into()));
}

#[test]
fn add_prompts_for_each_field() {
    let (session, output) = run("add\nJoão Silva\n8\n7\n9\nquit\n");
    assert_eq!(session.store().len(), 1);

    let record = session.records().next().unwrap();
    assert_eq!(record.name(), "João Silva");
    assert_eq!(record.final_average(), 8);

    assert!(output.contains("Nome do Aluno: "));
    assert!(output.contains("Trabalho (40%): "));
    assert!(output.contains("Registrado: João Silva"));
}

#[test]
fn invalid_submission_is_reported_and_not_stored() {
    let (session, output) = run("add\n\n11\n3.5\nabc\n");
    assert!(session.store().is_empty());
    assert!(output.contains("Nome é obrigatório"));
    assert!(output.contains("Entre 0 e 10"));
    assert!(output.contains("Apenas números inteiros"));
    assert!(output.contains("Deve ser um número"));
}

#[test]
fn remove_by_position() {
    let (session, _) = run("add\nAna\n5\n5\n4\nadd\nBia\n9\n9\n9\nremove 1\n");
    let names: Vec<&str> = session.records().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Ana"]);
}

#[test]
fn unknown_targets_leave_the_list_alone() {
    let (session, output) = run("add\nAna\n5\n5\n4\nremove 7\nremove zz\nremove 1234567\nremove\n");
    assert_eq!(session.store().len(), 1);
    assert!(output.contains("Nenhum aluno corresponde a `7`"));
    // seven digits is still a position, never an id prefix
    assert!(output.contains("Nenhum aluno corresponde a `1234567`"));
    assert!(output.contains("Uso: remove"));
}

#[test]
fn remove_by_full_identifier() {
    let (mut session, _) = run("add\nAna\n5\n5\n4\n");
    let id = session.records().next().unwrap().id();

    let script = format!("remove {id}\n");
    let mut output = Vec::new();
    let mut shell = Shell::new(session.clone(), Cursor::new(script.into_bytes()), &mut output);
    shell.run().unwrap();
    assert!(shell.into_session().store().is_empty());

    assert!(session.remove(id));
}

#[test]
fn end_of_input_mid_form_stops_cleanly() {
    let (session, _) = run("add\nAna\n5\n");
    assert!(session.store().is_empty());
}

#[test]
fn json_and_unknown_commands() {
    let (_, output) = run("add\nAna\n5\n5\n4\njson\nfly\n");
    assert!(output.contains("\"finalAverage\": 5"));
    assert!(output.contains("Comando desconhecido: `fly`"));
}
