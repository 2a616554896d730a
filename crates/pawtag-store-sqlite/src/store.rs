//! [`SqliteStore`] — the SQLite implementation of [`RegistryStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use pawtag_core::{
  account::{Account, NewAccount},
  identifier::{Identifier, TagStatus},
  profile::{NewProfile, Profile, ProfilePatch, ProfileWithCode},
  store::{IdentifierSummary, ListQuery, Page, RegistryStore, Stats, StatusFilter},
};

use crate::{
  Error, Result,
  encode::{
    RawAccount, RawIdentifier, RawProfile, encode_channel, encode_date,
    encode_dt, encode_role, encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A pawtag registry backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All calls
/// are serialized through the connection's worker thread, which is what makes
/// the read-then-write sequences below safe without extra locking.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Row helpers ─────────────────────────────────────────────────────────────

const IDENTIFIER_COLS: &str = "identifier_id, code, status, created_at, bound_at";

const PROFILE_COLS: &str = "profile_id, identifier_id, owner_id, contact_name, \
   phone, channel, secondary_phone, name, species, breed, birth_date, sex, \
   notes, photo, created_at";

fn identifier_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawIdentifier> {
  Ok(RawIdentifier {
    identifier_id: row.get(0)?,
    code:          row.get(1)?,
    status:        row.get(2)?,
    created_at:    row.get(3)?,
    bound_at:      row.get(4)?,
  })
}

fn profile_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawProfile> {
  Ok(RawProfile {
    profile_id:      row.get(0)?,
    identifier_id:   row.get(1)?,
    owner_id:        row.get(2)?,
    contact_name:    row.get(3)?,
    phone:           row.get(4)?,
    channel:         row.get(5)?,
    secondary_phone: row.get(6)?,
    name:            row.get(7)?,
    species:         row.get(8)?,
    breed:           row.get(9)?,
    birth_date:      row.get(10)?,
    sex:             row.get(11)?,
    notes:           row.get(12)?,
    photo:           row.get(13)?,
    created_at:      row.get(14)?,
  })
}

/// Fetch one identifier (by code or by row id) plus its profile, if any.
fn fetch_identifier(
  conn: &rusqlite::Connection,
  by_code: bool,
  key: &str,
) -> rusqlite::Result<Option<(RawIdentifier, Option<RawProfile>)>> {
  let sql = if by_code {
    format!("SELECT {IDENTIFIER_COLS} FROM identifiers WHERE code = ?1")
  } else {
    format!("SELECT {IDENTIFIER_COLS} FROM identifiers WHERE identifier_id = ?1")
  };

  let raw = conn
    .query_row(&sql, rusqlite::params![key], identifier_from_row)
    .optional()?;

  let Some(raw) = raw else { return Ok(None) };

  let profile = conn
    .query_row(
      &format!("SELECT {PROFILE_COLS} FROM profiles WHERE identifier_id = ?1"),
      rusqlite::params![raw.identifier_id],
      profile_from_row,
    )
    .optional()?;

  Ok(Some((raw, profile)))
}

/// Shared SELECT for listings and exports: identifiers newest-first with
/// their linked profile summary. `window` is `(limit, offset)`.
fn select_summaries(
  conn: &rusqlite::Connection,
  status: Option<&str>,
  window: Option<(i64, i64)>,
) -> rusqlite::Result<Vec<(RawIdentifier, Option<String>, Option<String>)>> {
  let map = |row: &rusqlite::Row<'_>| {
    Ok((identifier_from_row(row)?, row.get::<_, Option<String>>(5)?, row.get(6)?))
  };

  let sql = |where_clause: &str, window_clause: &str| {
    format!(
      "SELECT i.identifier_id, i.code, i.status, i.created_at, i.bound_at,
              p.name, p.contact_name
       FROM identifiers i
       LEFT JOIN profiles p ON p.identifier_id = i.identifier_id
       {where_clause}
       ORDER BY i.created_at DESC, i.code DESC
       {window_clause}"
    )
  };

  let rows = match (status, window) {
    (Some(s), Some((limit, offset))) => {
      let mut stmt = conn.prepare(&sql("WHERE i.status = ?1", "LIMIT ?2 OFFSET ?3"))?;
      let rows = stmt
        .query_map(rusqlite::params![s, limit, offset], map)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      rows
    }
    (Some(s), None) => {
      let mut stmt = conn.prepare(&sql("WHERE i.status = ?1", ""))?;
      let rows = stmt
        .query_map(rusqlite::params![s], map)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      rows
    }
    (None, Some((limit, offset))) => {
      let mut stmt = conn.prepare(&sql("", "LIMIT ?1 OFFSET ?2"))?;
      let rows = stmt
        .query_map(rusqlite::params![limit, offset], map)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      rows
    }
    (None, None) => {
      let mut stmt = conn.prepare(&sql("", ""))?;
      let rows = stmt
        .query_map([], map)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      rows
    }
  };

  Ok(rows)
}

fn status_keyword(filter: StatusFilter) -> Option<&'static str> {
  match filter {
    StatusFilter::All => None,
    StatusFilter::Unbound => Some("unbound"),
    StatusFilter::Bound => Some("bound"),
  }
}

fn summaries_into_domain(
  raws: Vec<(RawIdentifier, Option<String>, Option<String>)>,
) -> Result<Vec<IdentifierSummary>> {
  raws
    .into_iter()
    .map(|(raw, pet_name, contact_name)| {
      Ok(IdentifierSummary {
        identifier: raw.into_identifier()?,
        pet_name,
        contact_name,
      })
    })
    .collect()
}

// Outcomes carried out of transaction closures, so domain failures can be
// raised after the call instead of being squeezed through rusqlite's error
// type.
enum Activation {
  NotFound,
  AlreadyBound,
  Created { identifier_id: String },
}

enum Deletion {
  NotFound,
  StillBound,
  Deleted,
}

// ─── RegistryStore impl ──────────────────────────────────────────────────────

impl RegistryStore for SqliteStore {
  type Error = Error;

  // ── Accounts ──────────────────────────────────────────────────────────────

  async fn add_account(&self, input: NewAccount) -> Result<Account> {
    let account = Account {
      account_id:    Uuid::new_v4(),
      email:         input.email,
      name:          input.name,
      password_hash: input.password_hash,
      role:          input.role,
      created_at:    Utc::now(),
    };

    let id_str   = encode_uuid(account.account_id);
    let email    = account.email.clone();
    let name     = account.name.clone();
    let hash     = account.password_hash.clone();
    let role_str = encode_role(account.role).to_owned();
    let at_str   = encode_dt(account.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO accounts (account_id, email, name, password_hash, role, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, email, name, hash, role_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(account)
  }

  async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
    let email = email.to_owned();

    let raw: Option<RawAccount> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT account_id, email, name, password_hash, role, created_at
               FROM accounts WHERE email = ?1",
              rusqlite::params![email],
              |row| {
                Ok(RawAccount {
                  account_id:    row.get(0)?,
                  email:         row.get(1)?,
                  name:          row.get(2)?,
                  password_hash: row.get(3)?,
                  role:          row.get(4)?,
                  created_at:    row.get(5)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawAccount::into_account).transpose()
  }

  // ── Identifiers ───────────────────────────────────────────────────────────

  async fn last_code(&self) -> Result<Option<String>> {
    // Fixed-width zero-padding makes lexicographic MAX the numeric maximum.
    let code = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              "SELECT code FROM identifiers ORDER BY code DESC LIMIT 1",
              [],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(code)
  }

  async fn insert_identifiers(&self, codes: Vec<String>) -> Result<Vec<Identifier>> {
    let now = Utc::now();
    let identifiers: Vec<Identifier> = codes
      .into_iter()
      .map(|code| Identifier {
        identifier_id: Uuid::new_v4(),
        code,
        status: TagStatus::Unbound,
        created_at: now,
        bound_at: None,
      })
      .collect();

    let rows: Vec<(String, String, String)> = identifiers
      .iter()
      .map(|i| (encode_uuid(i.identifier_id), i.code.clone(), encode_dt(i.created_at)))
      .collect();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        for (id_str, code, at_str) in &rows {
          tx.execute(
            "INSERT INTO identifiers (identifier_id, code, status, created_at)
             VALUES (?1, ?2, 'unbound', ?3)",
            rusqlite::params![id_str, code, at_str],
          )?;
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(identifiers)
  }

  async fn get_identifier_with_profile(
    &self,
    code: &str,
  ) -> Result<Option<(Identifier, Option<Profile>)>> {
    let code = code.to_owned();

    let raw = self
      .conn
      .call(move |conn| Ok(fetch_identifier(conn, true, &code)?))
      .await?;

    raw
      .map(|(ri, rp)| {
        Ok((ri.into_identifier()?, rp.map(RawProfile::into_profile).transpose()?))
      })
      .transpose()
  }

  async fn get_identifier_by_id(
    &self,
    id: Uuid,
  ) -> Result<Option<(Identifier, Option<Profile>)>> {
    let id_str = encode_uuid(id);

    let raw = self
      .conn
      .call(move |conn| Ok(fetch_identifier(conn, false, &id_str)?))
      .await?;

    raw
      .map(|(ri, rp)| {
        Ok((ri.into_identifier()?, rp.map(RawProfile::into_profile).transpose()?))
      })
      .transpose()
  }

  async fn delete_identifier(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    let outcome = self
      .conn
      .call(move |conn| {
        let status: Option<String> = conn
          .query_row(
            "SELECT status FROM identifiers WHERE identifier_id = ?1",
            rusqlite::params![id_str],
            |row| row.get(0),
          )
          .optional()?;

        match status.as_deref() {
          None => Ok(Deletion::NotFound),
          Some("bound") => Ok(Deletion::StillBound),
          Some(_) => {
            conn.execute(
              "DELETE FROM identifiers WHERE identifier_id = ?1",
              rusqlite::params![id_str],
            )?;
            Ok(Deletion::Deleted)
          }
        }
      })
      .await?;

    match outcome {
      Deletion::NotFound => Err(Error::Domain(
        pawtag_core::Error::IdentifierNotFound(id.to_string()),
      )),
      Deletion::StillBound => Err(Error::Domain(pawtag_core::Error::Validation(
        "cannot delete a bound identifier".into(),
      ))),
      Deletion::Deleted => Ok(()),
    }
  }

  async fn list_identifiers(&self, query: ListQuery) -> Result<Page<IdentifierSummary>> {
    let query = query.clamped();
    let status = status_keyword(query.filter).map(str::to_owned);
    let limit = i64::from(query.page_size);
    let offset = query.offset() as i64;

    let (raws, total) = self
      .conn
      .call(move |conn| {
        let total: i64 = match status.as_deref() {
          Some(s) => conn.query_row(
            "SELECT COUNT(*) FROM identifiers WHERE status = ?1",
            rusqlite::params![s],
            |row| row.get(0),
          )?,
          None => {
            conn.query_row("SELECT COUNT(*) FROM identifiers", [], |row| row.get(0))?
          }
        };

        let rows = select_summaries(conn, status.as_deref(), Some((limit, offset)))?;
        Ok((rows, total))
      })
      .await?;

    let items = summaries_into_domain(raws)?;
    Ok(Page::new(items, &query, total as u64))
  }

  async fn export_rows(&self, filter: StatusFilter) -> Result<Vec<IdentifierSummary>> {
    let status = status_keyword(filter).map(str::to_owned);

    let raws = self
      .conn
      .call(move |conn| Ok(select_summaries(conn, status.as_deref(), None)?))
      .await?;

    summaries_into_domain(raws)
  }

  async fn stats(&self) -> Result<Stats> {
    let (identifiers, unbound, bound, profiles) = self
      .conn
      .call(|conn| {
        let count = |sql: &str| conn.query_row(sql, [], |row| row.get::<_, i64>(0));
        Ok((
          count("SELECT COUNT(*) FROM identifiers")?,
          count("SELECT COUNT(*) FROM identifiers WHERE status = 'unbound'")?,
          count("SELECT COUNT(*) FROM identifiers WHERE status = 'bound'")?,
          count("SELECT COUNT(*) FROM profiles")?,
        ))
      })
      .await?;

    Ok(Stats {
      identifiers: identifiers as u64,
      unbound:     unbound as u64,
      bound:       bound as u64,
      profiles:    profiles as u64,
    })
  }

  // ── Activation ────────────────────────────────────────────────────────────

  async fn activate(
    &self,
    code: &str,
    owner_id: Uuid,
    input: NewProfile,
  ) -> Result<Profile> {
    let profile_id = Uuid::new_v4();
    let now = Utc::now();

    let code_owned     = code.to_owned();
    let profile_id_str = encode_uuid(profile_id);
    let owner_id_str   = encode_uuid(owner_id);
    let now_str        = encode_dt(now);
    let fields         = input.clone();

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let row: Option<(String, String)> = tx
          .query_row(
            "SELECT identifier_id, status FROM identifiers WHERE code = ?1",
            rusqlite::params![code_owned],
            |r| Ok((r.get(0)?, r.get(1)?)),
          )
          .optional()?;

        let Some((identifier_id, status)) = row else {
          return Ok(Activation::NotFound);
        };
        if status == "bound" {
          return Ok(Activation::AlreadyBound);
        }

        tx.execute(
          "INSERT INTO profiles (
             profile_id, identifier_id, owner_id, contact_name, phone,
             channel, secondary_phone, name, species, breed, birth_date,
             sex, notes, photo, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, NULL, ?14)",
          rusqlite::params![
            profile_id_str,
            identifier_id,
            owner_id_str,
            fields.contact_name,
            fields.phone,
            encode_channel(fields.channel),
            fields.secondary_phone,
            fields.name,
            fields.species,
            fields.breed,
            fields.birth_date.map(encode_date),
            fields.sex,
            fields.notes,
            now_str,
          ],
        )?;

        tx.execute(
          "UPDATE identifiers SET status = 'bound', bound_at = ?2
           WHERE identifier_id = ?1",
          rusqlite::params![identifier_id, now_str],
        )?;

        tx.commit()?;
        Ok(Activation::Created { identifier_id })
      })
      .await?;

    match outcome {
      Activation::NotFound => Err(Error::Domain(
        pawtag_core::Error::IdentifierNotFound(code.to_owned()),
      )),
      Activation::AlreadyBound => Err(Error::Domain(
        pawtag_core::Error::AlreadyActivated(code.to_owned()),
      )),
      Activation::Created { identifier_id } => Ok(Profile {
        profile_id,
        identifier_id: crate::encode::decode_uuid(&identifier_id)?,
        owner_id,
        contact_name: input.contact_name,
        phone: input.phone,
        channel: input.channel,
        secondary_phone: input.secondary_phone,
        name: input.name,
        species: input.species,
        breed: input.breed,
        birth_date: input.birth_date,
        sex: input.sex,
        notes: input.notes,
        photo: None,
        created_at: now,
      }),
    }
  }

  // ── Profiles ──────────────────────────────────────────────────────────────

  async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawProfile> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PROFILE_COLS} FROM profiles WHERE profile_id = ?1"),
              rusqlite::params![id_str],
              profile_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawProfile::into_profile).transpose()
  }

  async fn list_profiles_for_owner(&self, owner_id: Uuid) -> Result<Vec<ProfileWithCode>> {
    let owner_str = encode_uuid(owner_id);

    let raws: Vec<(RawProfile, String)> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {cols}, i.code
           FROM profiles p
           JOIN identifiers i ON i.identifier_id = p.identifier_id
           WHERE p.owner_id = ?1
           ORDER BY p.created_at DESC",
          cols = "p.profile_id, p.identifier_id, p.owner_id, p.contact_name, \
                  p.phone, p.channel, p.secondary_phone, p.name, p.species, \
                  p.breed, p.birth_date, p.sex, p.notes, p.photo, p.created_at",
        ))?;

        let rows = stmt
          .query_map(rusqlite::params![owner_str], |row| {
            Ok((profile_from_row(row)?, row.get::<_, String>(15)?))
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(|(raw, code)| Ok(ProfileWithCode { profile: raw.into_profile()?, code }))
      .collect()
  }

  async fn update_profile(
    &self,
    id: Uuid,
    requester: Uuid,
    patch: ProfilePatch,
  ) -> Result<Profile> {
    let id_str = encode_uuid(id);

    let raw: Option<RawProfile> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PROFILE_COLS} FROM profiles WHERE profile_id = ?1"),
              rusqlite::params![id_str],
              profile_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    let Some(raw) = raw else {
      return Err(Error::Domain(pawtag_core::Error::ProfileNotFound(id)));
    };
    let mut profile = raw.into_profile()?;

    // Ownership is enforced here, not just in the view layer.
    if profile.owner_id != requester {
      return Err(Error::Domain(pawtag_core::Error::Forbidden));
    }

    patch.apply(&mut profile).map_err(Error::Domain)?;

    let id_str          = encode_uuid(id);
    let contact_name    = profile.contact_name.clone();
    let phone           = profile.phone.clone();
    let channel_str     = encode_channel(profile.channel).to_owned();
    let secondary_phone = profile.secondary_phone.clone();
    let name            = profile.name.clone();
    let species         = profile.species.clone();
    let breed           = profile.breed.clone();
    let birth_str       = profile.birth_date.map(encode_date);
    let sex             = profile.sex.clone();
    let notes           = profile.notes.clone();
    let photo           = profile.photo.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE profiles SET
             contact_name = ?2, phone = ?3, channel = ?4, secondary_phone = ?5,
             name = ?6, species = ?7, breed = ?8, birth_date = ?9, sex = ?10,
             notes = ?11, photo = ?12
           WHERE profile_id = ?1",
          rusqlite::params![
            id_str,
            contact_name,
            phone,
            channel_str,
            secondary_phone,
            name,
            species,
            breed,
            birth_str,
            sex,
            notes,
            photo,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(profile)
  }
}
