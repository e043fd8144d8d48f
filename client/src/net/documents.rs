//! GraphQL operation documents sent to the upstream API.

// Auth

pub const LOGIN: &str = r"
mutation Login($username: String!, $password: String!) {
  login(username: $username, password: $password) {
    token
    username
    role
  }
}";

pub const REGISTER: &str = r"
mutation Register($username: String!, $password: String!) {
  register(username: $username, password: $password)
}";

pub const REGISTER_ADMIN: &str = r"
mutation RegisterAdmin($username: String!, $password: String!, $adminToken: String!) {
  registerAdmin(username: $username, password: $password, adminToken: $adminToken)
}";

pub const LOGOUT: &str = r"
mutation Logout($token: String!) {
  logout(token: $token)
}";

// Products

pub const PRODUCTS: &str = r"
query GetProducts {
  products {
    id
    name
    description
    price
  }
}";

pub const PRODUCT: &str = r"
query GetProduct($id: ID!) {
  product(id: $id) {
    id
    name
    description
    price
  }
}";

pub const CREATE_PRODUCT: &str = r"
mutation CreateProduct($input: ProductInput!) {
  createProduct(input: $input) {
    id
    name
    description
    price
  }
}";

pub const UPDATE_PRODUCT: &str = r"
mutation UpdateProduct($id: ID!, $input: ProductInput!) {
  updateProduct(id: $id, input: $input) {
    id
    name
    description
    price
  }
}";

pub const DELETE_PRODUCT: &str = r"
mutation DeleteProduct($id: ID!) {
  deleteProduct(id: $id)
}";

// Orders

pub const MY_ORDERS: &str = r"
query GetMyOrders {
  myOrders {
    id
    total
    status
    createdAt
    items {
      id
      quantity
      price
      product {
        id
        name
      }
    }
  }
}";

pub const ALL_ORDERS: &str = r"
query GetAllOrders {
  allOrders {
    id
    total
    status
    createdAt
    user {
      id
      username
    }
    items {
      id
      quantity
      price
      product {
        id
        name
      }
    }
  }
}";

pub const ORDER: &str = r"
query GetOrder($id: ID!) {
  order(id: $id) {
    id
    total
    status
    createdAt
    user {
      id
      username
    }
    items {
      id
      quantity
      price
      product {
        id
        name
      }
    }
  }
}";

pub const CREATE_ORDER: &str = r"
mutation CreateOrder($input: OrderInput!) {
  createOrder(input: $input) {
    id
    total
    status
    createdAt
  }
}";

pub const UPDATE_ORDER_STATUS: &str = r"
mutation UpdateOrderStatus($id: ID!, $status: OrderStatus!) {
  updateOrderStatus(id: $id, status: $status) {
    id
    status
  }
}";
