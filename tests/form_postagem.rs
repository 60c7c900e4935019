mod common;

use blog_pessoal::{
    Field, FieldUpdate, FormPostagem, Postagem, Route, Session, Shell, Tema, ToastKind, Usuario,
};
use common::{Call, ScriptedApi, logged_in, usuario_login};
use tokio_test::block_on;

fn shell_at(route: Route) -> Shell {
    Shell::new(route, std::time::Duration::from_secs(5))
}

fn postagem_5() -> Postagem {
    Postagem {
        id: Some(5),
        titulo: "Ownership".to_string(),
        texto: "Borrowing rules".to_string(),
        tema: Some(Tema::new(2, "")),
        usuario: Some(Usuario::from(&usuario_login())),
        ..Postagem::default()
    }
}

fn fill(form: &mut FormPostagem, session: &Session) {
    form.apply(FieldUpdate::Titulo("Async".to_string()), session);
    form.apply(FieldUpdate::Texto("Futures are lazy".to_string()), session);
}

#[test]
fn anonymous_mount_redirects_before_any_request() {
    let api = ScriptedApi::new();
    let mut session = Session::new();
    let mut shell = shell_at(Route::NovaPostagem);
    let mut form = FormPostagem::new(None);

    block_on(form.mount(&api, &mut session, &mut shell));

    assert!(api.calls().is_empty());
    assert_eq!(shell.route(), Route::Root);
    let toast = shell.toasts.current().unwrap();
    assert_eq!(toast.message, "Você precisa estar logado");
    assert_eq!(toast.kind, ToastKind::Info);
}

#[test]
fn anonymous_edit_mount_redirects_too() {
    let api = ScriptedApi::new().with_postagem(postagem_5());
    let mut session = Session::new();
    let mut shell = shell_at(Route::EditarPostagem(5));
    let mut form = FormPostagem::new(Some(5));

    block_on(form.mount(&api, &mut session, &mut shell));

    assert!(api.calls().is_empty());
    assert_eq!(shell.route(), Route::Root);
}

#[test]
fn create_mount_loads_themes_only() {
    let api = ScriptedApi::new();
    let mut session = logged_in();
    let mut shell = shell_at(Route::NovaPostagem);
    let mut form = FormPostagem::new(None);

    block_on(form.mount(&api, &mut session, &mut shell));

    assert_eq!(api.calls(), vec![Call::ListarTemas]);
    assert_eq!(form.temas().len(), 2);
    assert!(form.submit_disabled());
    assert_eq!(shell.route(), Route::NovaPostagem);
}

#[test]
fn edit_mount_loads_post_and_its_theme() {
    let api = ScriptedApi::new().with_postagem(postagem_5());
    let mut session = logged_in();
    let mut shell = shell_at(Route::EditarPostagem(5));
    let mut form = FormPostagem::new(Some(5));

    block_on(form.mount(&api, &mut session, &mut shell));

    assert_eq!(
        api.calls(),
        vec![Call::ListarTemas, Call::BuscarPostagem(5), Call::BuscarTema(2)]
    );
    assert_eq!(form.tema(), &Tema::new(2, "Java"));
    assert_eq!(form.postagem().titulo, "Ownership");
    assert!(!form.submit_disabled());
}

#[test]
fn selected_theme_matches_fetched_theme() {
    let api = ScriptedApi::new();
    let mut session = logged_in();
    let mut shell = shell_at(Route::NovaPostagem);
    let mut form = FormPostagem::new(None);

    block_on(form.mount(&api, &mut session, &mut shell));
    block_on(form.select_tema(1, &api, &mut session, &mut shell));

    assert_eq!(form.tema().id, 1);
    assert_eq!(form.tema().descricao, "Rust");
    assert!(!form.submit_disabled());
}

#[test]
fn field_change_keeps_other_fields_and_reasserts_owner() {
    let api = ScriptedApi::new();
    let mut session = logged_in();
    let mut shell = shell_at(Route::NovaPostagem);
    let mut form = FormPostagem::new(None);

    block_on(form.mount(&api, &mut session, &mut shell));
    block_on(form.select_tema(2, &api, &mut session, &mut shell));
    fill(&mut form, &session);
    form.apply(Field::Github.update("https://github.com/x"), &session);

    let postagem = form.postagem();
    assert_eq!(postagem.titulo, "Async");
    assert_eq!(postagem.texto, "Futures are lazy");
    assert_eq!(postagem.github.as_deref(), Some("https://github.com/x"));
    assert_eq!(postagem.tema, Some(Tema::new(2, "Java")));
    assert_eq!(postagem.usuario.as_ref().and_then(|u| u.id), Some(7));
}

#[test]
fn create_submit_posts_once_and_leaves_for_listing() {
    let api = ScriptedApi::new();
    let mut session = logged_in();
    let mut shell = shell_at(Route::NovaPostagem);
    let mut form = FormPostagem::new(None);

    block_on(form.mount(&api, &mut session, &mut shell));
    block_on(form.select_tema(1, &api, &mut session, &mut shell));
    fill(&mut form, &session);
    block_on(form.submit(&api, &mut session, &mut shell));

    assert_eq!(
        api.count(|c| matches!(c, Call::CadastrarPostagem(_))),
        1
    );
    assert_eq!(api.count(|c| matches!(c, Call::AtualizarPostagem(_))), 0);
    assert_eq!(shell.route(), Route::Postagens);
    assert_eq!(shell.router.visits(Route::Postagens), 1);
    assert!(shell.toasts.contains("Postagem cadastrada com sucesso"));
    assert!(!form.is_loading());
}

#[test]
fn submit_is_ignored_while_disabled() {
    let api = ScriptedApi::new();
    let mut session = logged_in();
    let mut shell = shell_at(Route::NovaPostagem);
    let mut form = FormPostagem::new(None);

    block_on(form.mount(&api, &mut session, &mut shell));
    fill(&mut form, &session);
    block_on(form.submit(&api, &mut session, &mut shell));

    assert_eq!(api.count(|c| matches!(c, Call::CadastrarPostagem(_))), 0);
    assert_eq!(shell.route(), Route::NovaPostagem);
}

#[test]
fn update_submit_puts_once() {
    let api = ScriptedApi::new().with_postagem(postagem_5());
    let mut session = logged_in();
    let mut shell = shell_at(Route::EditarPostagem(5));
    let mut form = FormPostagem::new(Some(5));

    block_on(form.mount(&api, &mut session, &mut shell));
    form.apply(FieldUpdate::Titulo("Ownership, again".to_string()), &session);
    block_on(form.submit(&api, &mut session, &mut shell));

    let calls = api.calls();
    let updates: Vec<_> = calls
        .iter()
        .filter_map(|c| match c {
            Call::AtualizarPostagem(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].id, Some(5));
    assert_eq!(updates[0].titulo, "Ownership, again");
    assert_eq!(api.count(|c| matches!(c, Call::CadastrarPostagem(_))), 0);
    assert_eq!(shell.router.visits(Route::Postagens), 1);
    assert!(shell.toasts.contains("Postagem atualizada com sucesso"));
}

#[test]
fn forbidden_update_logs_out_without_failure_notice() {
    let api = ScriptedApi::new()
        .with_postagem(postagem_5())
        .failing("PUT /postagens", 403);
    let mut session = logged_in();
    let mut shell = shell_at(Route::EditarPostagem(5));
    let mut form = FormPostagem::new(Some(5));

    block_on(form.mount(&api, &mut session, &mut shell));
    block_on(form.submit(&api, &mut session, &mut shell));

    assert!(!session.is_authenticated());
    assert!(!shell.toasts.contains("Erro ao atualizar a Postagem"));
    assert_eq!(shell.route(), Route::Postagens);
    assert!(!form.is_loading());
}

#[test]
fn other_update_failure_shows_notice_and_keeps_session() {
    let api = ScriptedApi::new()
        .with_postagem(postagem_5())
        .failing("PUT /postagens", 500);
    let mut session = logged_in();
    let mut shell = shell_at(Route::EditarPostagem(5));
    let mut form = FormPostagem::new(Some(5));

    block_on(form.mount(&api, &mut session, &mut shell));
    block_on(form.submit(&api, &mut session, &mut shell));

    assert!(session.is_authenticated());
    let toast = shell
        .toasts
        .iter()
        .find(|t| t.message == "Erro ao atualizar a Postagem")
        .unwrap();
    assert_eq!(toast.kind, ToastKind::Erro);
    assert_eq!(shell.route(), Route::Postagens);
}

#[test]
fn failed_create_still_navigates_once() {
    let api = ScriptedApi::new().failing("POST /postagens", 400);
    let mut session = logged_in();
    let mut shell = shell_at(Route::NovaPostagem);
    let mut form = FormPostagem::new(None);

    block_on(form.mount(&api, &mut session, &mut shell));
    block_on(form.select_tema(1, &api, &mut session, &mut shell));
    fill(&mut form, &session);
    block_on(form.submit(&api, &mut session, &mut shell));

    assert!(shell.toasts.contains("Erro ao cadastrar a Postagem"));
    assert_eq!(shell.router.visits(Route::Postagens), 1);
}

#[test]
fn theme_list_failure_raises_notice() {
    let api = ScriptedApi::new().failing("/temas", 500);
    let mut session = logged_in();
    let mut shell = shell_at(Route::NovaPostagem);
    let mut form = FormPostagem::new(None);

    block_on(form.mount(&api, &mut session, &mut shell));

    assert!(shell.toasts.contains("Erro ao buscar os temas"));
    assert!(session.is_authenticated());
}

#[test]
fn forbidden_post_fetch_logs_out() {
    let api = ScriptedApi::new()
        .with_postagem(postagem_5())
        .failing("/postagens/{id}", 403);
    let mut session = logged_in();
    let mut shell = shell_at(Route::EditarPostagem(5));
    let mut form = FormPostagem::new(Some(5));

    block_on(form.mount(&api, &mut session, &mut shell));

    assert!(!session.is_authenticated());
    assert!(!shell.toasts.contains("Erro ao buscar a postagem"));
    assert_eq!(api.count(|c| matches!(c, Call::BuscarTema(_))), 0);
    assert!(form.submit_disabled());
}
