use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::Router;
use booking_service::domain::room::errors::RoomError;
use booking_service::domain::room::models::NewRoom;
use booking_service::domain::room::models::Room;
use booking_service::domain::room::models::RoomId;
use booking_service::domain::room::ports::RoomRepository;
use booking_service::domain::room::service::RoomService;
use booking_service::domain::subject::errors::SubjectError;
use booking_service::domain::subject::models::Subject;
use booking_service::domain::subject::models::SubjectId;
use booking_service::domain::subject::ports::SubjectRepository;
use booking_service::domain::subject::service::SubjectService;
use booking_service::domain::user::errors::UserError;
use booking_service::domain::user::models::Login;
use booking_service::domain::user::models::NewUser;
use booking_service::domain::user::models::Role;
use booking_service::domain::user::models::User;
use booking_service::domain::user::models::UserId;
use booking_service::domain::user::ports::UserRepository;
use booking_service::domain::user::service::UserService;
use booking_service::inbound::http::router::create_router;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const SECRET: &[u8] = b"test-secret-key-for-signing-at-least-32-bytes";
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// In-memory credential store standing in for Postgres.
///
/// `fail_lookups` simulates a storage fault so tests can check that the
/// access gate fails closed instead of treating a fault as "no such user".
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
    fail_lookups: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_lookups: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_lookups.store(failing, Ordering::SeqCst);
    }

    fn check_fault(&self) -> Result<(), UserError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            Err(UserError::DatabaseError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        self.check_fault()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.login == user.login) {
            return Err(UserError::LoginAlreadyExists(user.login.to_string()));
        }
        let created = User {
            id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            login: user.login,
            password_hash: user.password_hash,
            role: user.role,
            last_name: user.last_name,
            first_name: user.first_name,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        self.check_fault()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, UserError> {
        self.check_fault()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.login == login).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        self.check_fault()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn delete_by_login(&self, login: &Login) -> Result<bool, UserError> {
        self.check_fault()?;
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| &u.login != login);
        Ok(users.len() < before)
    }
}

pub struct InMemoryRoomRepository {
    rooms: Mutex<Vec<Room>>,
    next_id: AtomicI64,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create(&self, room: NewRoom) -> Result<Room, RoomError> {
        let mut rooms = self.rooms.lock().unwrap();
        let created = Room {
            id: RoomId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            number: room.number,
            capacity: room.capacity,
            kind: room.kind,
        };
        rooms.push(created.clone());
        Ok(created)
    }

    async fn find_by_number(&self, number: &str) -> Result<Option<Room>, RoomError> {
        let rooms = self.rooms.lock().unwrap();
        Ok(rooms.iter().find(|r| r.number == number).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Room>, RoomError> {
        Ok(self.rooms.lock().unwrap().clone())
    }

    async fn delete_by_number(&self, number: &str) -> Result<bool, RoomError> {
        let mut rooms = self.rooms.lock().unwrap();
        let before = rooms.len();
        rooms.retain(|r| r.number != number);
        Ok(rooms.len() < before)
    }
}

pub struct InMemorySubjectRepository {
    subjects: Mutex<Vec<Subject>>,
    next_id: AtomicI64,
}

impl InMemorySubjectRepository {
    pub fn new() -> Self {
        Self {
            subjects: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl SubjectRepository for InMemorySubjectRepository {
    async fn create(&self, name: &str) -> Result<Subject, SubjectError> {
        let mut subjects = self.subjects.lock().unwrap();
        let created = Subject {
            id: SubjectId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: name.to_string(),
        };
        subjects.push(created.clone());
        Ok(created)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Subject>, SubjectError> {
        let subjects = self.subjects.lock().unwrap();
        Ok(subjects.iter().find(|s| s.name == name).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Subject>, SubjectError> {
        Ok(self.subjects.lock().unwrap().clone())
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, SubjectError> {
        let mut subjects = self.subjects.lock().unwrap();
        let before = subjects.len();
        subjects.retain(|s| s.name != name);
        Ok(subjects.len() < before)
    }
}

/// Test application driving the router in-process, no server or database.
pub struct TestApp {
    router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let authenticator = Arc::new(Authenticator::new(SECRET, TOKEN_TTL_MINUTES));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&users) as Arc<dyn UserRepository>,
            Arc::clone(&authenticator),
        ));
        let room_service = Arc::new(RoomService::new(Arc::new(InMemoryRoomRepository::new())));
        let subject_service = Arc::new(SubjectService::new(Arc::new(
            InMemorySubjectRepository::new(),
        )));

        let router = create_router(
            user_service,
            room_service,
            subject_service,
            Arc::clone(&authenticator),
        );

        Self {
            router,
            users,
            authenticator,
        }
    }

    /// Insert a user directly into the store, hashing the password for real.
    pub async fn seed_user(&self, login: &str, password: &str, role: i16) -> i64 {
        let password_hash = self
            .authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let user = self
            .users
            .create(NewUser {
                login: Login::new(login.to_string()).expect("Invalid test login"),
                password_hash,
                role: Role::from_value(role),
                last_name: "Gauthier".to_string(),
                first_name: "Elias".to_string(),
            })
            .await
            .expect("Failed to seed user");

        user.id.0
    }

    /// Log in through the HTTP surface and return the issued token.
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let response = self
            .send(
                Method::POST,
                "/api/auth/token",
                None,
                Some(serde_json::json!({ "username": username, "password": password })),
            )
            .await;
        assert_eq!(response.status(), 200, "login failed during test setup");

        let body = body_json(response).await;
        body["access_token"]
            .as_str()
            .expect("missing access_token")
            .to_string()
    }

    /// Request with an arbitrary Authorization header value, for scheme tests.
    pub async fn send_with_auth_header(
        &self,
        method: Method,
        path: &str,
        auth_header: &str,
    ) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::AUTHORIZATION, auth_header)
            .body(Body::empty())
            .expect("Failed to build request");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router call failed")
    }

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router call failed")
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}
