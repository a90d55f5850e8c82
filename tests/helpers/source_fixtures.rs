//! Common source fixtures for tests.

pub const USER_TYPE: &str = "type User {\n  id: ID\n}";

pub const EMPTY_TYPE: &str = "type Empty {}";

/// A schema touching every definition kind the built-in grammar knows.
pub const SCHEMA: &str = r#""""
The schema root. { braces in descriptions are ignored }
"""
schema {
  query: Query
  mutation: Mutation
}

# Users and their posts {
type User implements Node @key(fields: "id}") {
  id: ID!
  name: String
  posts(first: Int = 10, after: String): [Post!]!
}

interface Node {
  id: ID!
}

enum Role {
  ADMIN
  EDITOR @deprecated(reason: "use ADMIN }")
  VIEWER
}

input NewPost {
  title: String!
  body: String
}

union SearchResult = User | Post

scalar DateTime

directive @key(fields: String!) on OBJECT

type Post {
  id: ID!
  author: User
}

type Query {
  user(id: ID!): User
  search(term: String!): [SearchResult!]!
}

type Mutation {
  createPost(input: NewPost!): Post
}
"#;

pub const OPERATIONS: &str = r#"query GetUser($id: ID!) {
  user(id: $id) {
    name
  }
}

fragment UserParts on User {
  id
  ... on User {
    name
  }
}
"#;

/// A unit that ends inside a block comment.
pub const UNTERMINATED_COMMENT: &str = "type A {\n  x: Int\n/* never closed\n  type B {\n    y: Int\n";

/// Ten levels of bare braces with no entity line inside, then a field.
pub fn deep_anonymous_nesting() -> String {
    let mut text = String::from("type Deep {\n");
    text.push_str(&"{\n".repeat(10));
    text.push_str(&"}\n".repeat(10));
    text.push_str("  leaf: Int\n}\n");
    text
}
