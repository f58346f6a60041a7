//! Test doubles for driving `TodoApp` without a network.
//!
//! `FakeApi` answers requests from an in-memory collection the way
//! json-server does and records every request it sees. `RecordingUi`
//! remembers everything the app showed to the user.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use todo_core::{
    ApiError, HttpMethod, HttpRequest, HttpResponse, ListView, NewTodo, Todo, TodoId, TodoPatch,
    Transport, Ui,
};

pub const BASE_URL: &str = "http://api.test";

/// A request as seen by the fake server.
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl Seen {
    pub fn route(&self) -> (HttpMethod, &str) {
        (self.method, self.path.as_str())
    }
}

#[derive(Default)]
pub struct FakeApi {
    todos: RefCell<Vec<Todo>>,
    next_id: Cell<u64>,
    seen: RefCell<Vec<Seen>>,
    failures: RefCell<HashMap<HttpMethod, u16>>,
    offline: Cell<bool>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Self::default()
        }
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next = todos
            .iter()
            .filter_map(|t| match t.id {
                TodoId::Int(n) => Some(n),
                TodoId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        let api = Self::new();
        api.next_id.set(next);
        *api.todos.borrow_mut() = todos;
        api
    }

    /// Answer every request using `method` with `status` and leave the
    /// collection untouched.
    pub fn fail(&self, method: HttpMethod, status: u16) {
        self.failures.borrow_mut().insert(method, status);
    }

    pub fn heal(&self) {
        self.failures.borrow_mut().clear();
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Change a todo behind the client's back.
    pub fn set_completed(&self, id: u64, completed: bool) {
        let id = TodoId::Int(id);
        for todo in self.todos.borrow_mut().iter_mut().filter(|t| t.id == id) {
            todo.completed = completed;
        }
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.borrow().clone()
    }

    pub fn routes(&self) -> Vec<(HttpMethod, String)> {
        self.seen
            .borrow()
            .iter()
            .map(|s| (s.method, s.path.clone()))
            .collect()
    }

    pub fn clear_log(&self) {
        self.seen.borrow_mut().clear();
    }

    fn handle(&self, method: HttpMethod, path: &str, body: Option<&str>) -> HttpResponse {
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match (method, segments.as_slice()) {
            (HttpMethod::Get, ["todos"]) => json(200, &*self.todos.borrow()),
            (HttpMethod::Post, ["todos"]) => {
                let Some(new) = body.and_then(|b| serde_json::from_str::<NewTodo>(b).ok()) else {
                    return status(400);
                };
                let id = self.next_id.get();
                self.next_id.set(id + 1);
                let todo = Todo {
                    id: TodoId::Int(id),
                    title: new.title,
                    description: Some(new.description),
                    completed: new.completed,
                };
                self.todos.borrow_mut().push(todo.clone());
                json(201, &todo)
            }
            (HttpMethod::Get, ["todos", id]) => match self.find(id) {
                Some(todo) => json(200, &todo),
                None => status(404),
            },
            (HttpMethod::Patch, ["todos", id]) => {
                let Some(patch) = body.and_then(|b| serde_json::from_str::<TodoPatch>(b).ok())
                else {
                    return status(400);
                };
                self.update(id, |todo| {
                    if let Some(title) = patch.title {
                        todo.title = title;
                    }
                    if let Some(description) = patch.description {
                        todo.description = Some(description);
                    }
                    if let Some(completed) = patch.completed {
                        todo.completed = completed;
                    }
                })
            }
            (HttpMethod::Post, ["todos", id, "toggle"]) => {
                self.update(id, |todo| todo.completed = !todo.completed)
            }
            (HttpMethod::Delete, ["todos", id]) => {
                let id: TodoId = id.parse().unwrap();
                let mut todos = self.todos.borrow_mut();
                let before = todos.len();
                todos.retain(|t| t.id != id);
                if todos.len() == before {
                    status(404)
                } else {
                    json(200, &serde_json::json!({}))
                }
            }
            _ => status(404),
        }
    }

    fn find(&self, id: &str) -> Option<Todo> {
        let id: TodoId = id.parse().unwrap();
        self.todos.borrow().iter().find(|t| t.id == id).cloned()
    }

    fn update(&self, id: &str, apply: impl FnOnce(&mut Todo)) -> HttpResponse {
        let id: TodoId = id.parse().unwrap();
        let mut todos = self.todos.borrow_mut();
        match todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                apply(todo);
                json(200, &*todo)
            }
            None => status(404),
        }
    }
}

impl Transport for FakeApi {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let path = request
            .path
            .strip_prefix(BASE_URL)
            .expect("request outside the fake base url")
            .to_string();
        self.seen.borrow_mut().push(Seen {
            method: request.method,
            path: path.clone(),
            body: request
                .body
                .as_deref()
                .map(|b| serde_json::from_str(b).expect("request body is JSON")),
        });

        if self.offline.get() {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        if let Some(code) = self.failures.borrow().get(&request.method) {
            return Ok(status(*code));
        }
        Ok(self.handle(request.method, &path, request.body.as_deref()))
    }
}

fn json<T: serde::Serialize + ?Sized>(code: u16, value: &T) -> HttpResponse {
    HttpResponse {
        status: code,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: serde_json::to_string(value).unwrap(),
    }
}

fn status(code: u16) -> HttpResponse {
    HttpResponse {
        status: code,
        headers: Vec::new(),
        body: String::new(),
    }
}

/// Records everything `TodoApp` shows; answers confirmations with `answer`.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub views: Vec<ListView>,
    pub alerts: Vec<String>,
    pub confirmations: Vec<String>,
    pub resets: usize,
    pub answer: bool,
}

impl RecordingUi {
    pub fn confirming() -> Self {
        Self {
            answer: true,
            ..Self::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }

    pub fn last_view(&self) -> &ListView {
        self.views.last().expect("nothing rendered yet")
    }
}

impl Ui for RecordingUi {
    fn render(&mut self, view: &ListView) {
        self.views.push(view.clone());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answer
    }

    fn reset_form(&mut self) {
        self.resets += 1;
    }
}

pub fn todo(id: u64, title: &str, description: &str, completed: bool) -> Todo {
    Todo {
        id: TodoId::Int(id),
        title: title.to_string(),
        description: Some(description.to_string()),
        completed,
    }
}
