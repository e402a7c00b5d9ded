use calcmedias::{
    Field, GradeForm, GradingConfig, PassStatus, Session, classify,
    present::{count_label, field_message, field_messages, render_errors},
};
use serde_json::Value;

fn form(name: &str, work: &str, activity: &str, exam: &str) -> GradeForm {
    GradeForm::builder()
        .name(name)
        .work(work)
        .activity(activity)
        .exam(exam)
        .build()
}

#[test]
fn strong_end_to_end() {
    let mut session = Session::default();
    let record = session.submit(&form("João Silva", "8", "7", "9")).unwrap();
    assert_eq!(record.final_average(), 8);
    assert_eq!(classify(record, 10), PassStatus::Strong);
}

#[test]
fn borderline_end_to_end() {
    let mut session = Session::default();
    let record = session.submit(&form("Ana", "5", "5", "4")).unwrap();
    assert_eq!(record.final_average(), 5);
    assert_eq!(classify(record, 10), PassStatus::Borderline);
    assert!(PassStatus::Borderline.is_passing());
}

#[test]
fn weak_end_to_end() {
    let mut session = Session::default();
    let record = session.submit(&form("Rui", "2", "4", "3")).unwrap();
    assert_eq!(record.final_average(), 3);
    assert_eq!(classify(record, 10), PassStatus::Weak);
    assert!(!PassStatus::Weak.is_passing());
}

#[test]
fn messages_match_the_form_labels() {
    let mut session = Session::default();
    let errors = session.submit(&form(" ", "", "x", "11")).unwrap_err();
    assert!(session.store().is_empty());

    let messages = field_messages(&errors);
    assert_eq!(messages["name"], "Nome é obrigatório");
    assert_eq!(messages["work"], "Campo obrigatório");
    assert_eq!(messages["activity"], "Deve ser um número");
    assert_eq!(messages["exam"], "Entre 0 e 10");

    let fractional = session.submit(&form("Ana", "3.5", "1", "1")).unwrap_err();
    assert_eq!(
        field_message(fractional.get(Field::Work).unwrap()),
        "Apenas números inteiros"
    );

    let rendered = render_errors(&errors);
    assert_eq!(rendered.lines().count(), 4);
    assert!(rendered.lines().next().unwrap().contains("Nome do Aluno"));
    assert!(rendered.contains("Prova (30%): Entre 0 e 10"));
}

#[test]
fn table_lists_records_newest_first() {
    let mut session = Session::default();
    session.submit(&form("Ana", "5", "5", "4")).unwrap();
    session.submit(&form("João Silva", "8", "7", "9")).unwrap();

    let table = session.render();
    assert!(table.contains("Resultados da Sessão"));
    assert!(table.contains("Média Final"));
    assert!(table.contains("2 Alunos"));
    assert!(table.contains("8 ▲"));
    assert!(table.contains("5 ▲"));

    let joao = table.find("João Silva").unwrap();
    let ana = table.find("Ana").unwrap();
    assert!(joao < ana);
}

#[test]
fn weak_average_points_down() {
    let mut session = Session::default();
    session.submit(&form("Rui", "0", "0", "0")).unwrap();
    let table = session.render();
    assert!(table.contains("0 ▼"));
    assert!(table.contains("1 Aluno"));
}

#[test]
fn empty_session_shows_notice() {
    let session = Session::default();
    assert!(session.render().contains("Nenhum aluno registrado"));
    assert_eq!(session.render_json().unwrap().trim(), "[]");
}

#[test]
fn count_label_pluralizes() {
    assert_eq!(count_label(1), "1 Aluno");
    assert_eq!(count_label(0), "0 Alunos");
    assert_eq!(count_label(12), "12 Alunos");
}

#[test]
fn json_uses_camel_case_keys_and_status() {
    let mut session = Session::new(GradingConfig::default());
    let id = session.submit(&form("Ana", "5", "5", "4")).unwrap().id();

    let value: Value = serde_json::from_str(&session.render_json().unwrap()).unwrap();
    let first = &value[0];
    assert_eq!(first["id"], id.to_string());
    assert_eq!(first["name"], "Ana");
    assert_eq!(first["workGrade"], 5);
    assert_eq!(first["activityGrade"], 5);
    assert_eq!(first["examGrade"], 4);
    assert_eq!(first["finalAverage"], 5);
    assert_eq!(first["status"], "Borderline");
}
