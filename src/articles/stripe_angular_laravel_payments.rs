//! "Stripe Payments with Angular and Laravel: Start to Finish".

use crate::article::Metadata;

pub fn metadata() -> Metadata {
    Metadata {
        id: "stripe-angular-laravel-payments".to_owned(),
        title: "Stripe Payments with Angular and Laravel: Start to Finish"
            .to_owned(),
        description: "Implement secure card payments using Stripe with \
                      Angular (latest) and Laravel (latest). Covers setup, \
                      Payment Intents, Elements, webhooks, and testing."
            .to_owned(),
        thumbnail: "static/thumbnails/stripe-angular-laravel-payments.svg"
            .to_owned(),
        author: "Nauman Sadiq".to_owned(),
        date: "2025-09-02".to_owned(),
        read_time: "12 min read".to_owned(),
        tags: vec![
            "Stripe".to_owned(),
            "Angular".to_owned(),
            "Laravel".to_owned(),
            "Payments".to_owned(),
            "Webhooks".to_owned(),
            "TypeScript".to_owned(),
        ],
        category: "Payments".to_owned(),
    }
}

pub const BODY: &str = r##"This guide shows a clean, production-ready flow to accept card payments with Stripe using Angular on the frontend and Laravel on the backend. We will use Payment Intents, Stripe Elements, secure server-side confirmations, and webhooks for reliability.

## Prerequisites

- Stripe account (test mode is fine)
- Angular (latest) project with routing and HttpClient
- Laravel (latest) API project
- Two keys from Stripe: Publishable key (frontend) and Secret key (backend)

## 1) Laravel: Install and Configure Stripe

```bash
# composer.json already present
composer require stripe/stripe-php

# .env
STRIPE_SECRET=sk_test_xxx
STRIPE_WEBHOOK_SECRET=whsec_xxx
```

```php
// config/services.php
return [
    // ...
    'stripe' => [
        'secret' => env('STRIPE_SECRET'),
        'webhook_secret' => env('STRIPE_WEBHOOK_SECRET'),
    ],
];
```

Store your keys in .env. Never expose your secret to the client.

### Routes

```php
// routes/api.php
use Illuminate\Support\Facades\Route;
use App\Http\Controllers\PaymentController;

Route::post('/payments/create-intent', [PaymentController::class, 'createIntent']);
Route::post('/payments/webhook', [PaymentController::class, 'webhook']);
```

### Controller

```php
// app/Http/Controllers/PaymentController.php
<?php

namespace App\Http\Controllers;

use Illuminate\Http\Request;
use Illuminate\Support\Facades\Log;
use Symfony\Component\HttpFoundation\Response;

class PaymentController extends Controller
{
    public function createIntent(Request $request): Response
    {
        // In production, calculate amount server-side based on product/price IDs
        $amount = (int) ($request->input('amount', 1999)); // in cents
        $currency = $request->input('currency', 'usd');

        $stripe = new \Stripe\StripeClient(config('services.stripe.secret'));

        $intent = $stripe->paymentIntents->create([
            'amount' => $amount,
            'currency' => $currency,
            'automatic_payment_methods' => ['enabled' => true],
            // You can attach metadata/customer here as needed
        ]);

        return response([ 'clientSecret' => $intent->client_secret ]);
    }

    public function webhook(Request $request): Response
    {
        $payload = $request->getContent();
        $sigHeader = $request->header('Stripe-Signature');
        $endpointSecret = config('services.stripe.webhook_secret');

        try {
            $event = \Stripe\Webhook::constructEvent(
                $payload,
                $sigHeader,
                $endpointSecret
            );
        } catch (\UnexpectedValueException $e) {
            return response('Invalid payload', 400);
        } catch (\Stripe\Exception\SignatureVerificationException $e) {
            return response('Invalid signature', 400);
        }

        switch ($event->type) {
            case 'payment_intent.succeeded':
                $intent = $event->data->object; // \Stripe\PaymentIntent
                Log::info('Payment succeeded', ['id' => $intent->id]);
                // Fulfill the order, mark DB records paid, email, etc.
                break;
            case 'payment_intent.payment_failed':
                $intent = $event->data->object;
                Log::warning('Payment failed', ['id' => $intent->id]);
                break;
        }

        return response('ok');
    }
}
```

## 2) Angular: Install Stripe and Build the Checkout UI

```bash
# Angular project
npm install @stripe/stripe-js @types/stripe-v3
```

```typescript
// environment.ts
export const environment = {
  production: false,
  stripePublishableKey: 'pk_test_xxx',
  apiBaseUrl: 'http://localhost:8000/api' // your Laravel API
};
```

### Service to Create Payment Intents

```typescript
// src/app/services/payment.service.ts
import { Injectable } from '@angular/core';
import { HttpClient } from '@angular/common/http';
import { map } from 'rxjs/operators';
import { environment } from '../../environments/environment';

@Injectable({ providedIn: 'root' })
export class PaymentService {
  constructor(private http: HttpClient) {}

  createIntent(amountCents: number, currency = 'usd') {
    return this.http
      .post<{ clientSecret: string }>(
        environment.apiBaseUrl + '/payments/create-intent',
        { amount: amountCents, currency }
      )
      .pipe(map(res => res.clientSecret));
  }
}
```

### Checkout Component with Stripe Elements (Payment Element)

```typescript
// src/app/components/checkout/checkout.component.ts
import { Component, OnInit, OnDestroy } from '@angular/core';
import { loadStripe, Stripe, StripeElements, StripeElementsOptions } from '@stripe/stripe-js';
import { PaymentService } from '../../services/payment.service';
import { environment } from '../../../environments/environment';

@Component({
  selector: 'app-checkout',
  templateUrl: './checkout.component.html',
  styleUrls: ['./checkout.component.css']
})
export class CheckoutComponent implements OnInit, OnDestroy {
  private stripe?: Stripe;
  elements?: StripeElements;
  clientSecret = '';
  loading = false;

  async ngOnInit() {
    this.stripe = await loadStripe(environment.stripePublishableKey);

    // Ask backend for a PaymentIntent
    this.loading = true;
    try {
      // example amount: $19.99
      this.clientSecret = await this.paymentService.createIntent(1999).toPromise();

      const options: StripeElementsOptions = {
        clientSecret: this.clientSecret,
        appearance: { theme: 'night' }
      };
      this.elements = this.stripe!.elements(options);

      const paymentElement = this.elements.create('payment');
      paymentElement.mount('#payment-element');
    } finally {
      this.loading = false;
    }
  }

  constructor(private paymentService: PaymentService) {}

  async pay() {
    if (!this.stripe || !this.elements) return;
    this.loading = true;
    const { error } = await this.stripe.confirmPayment({
      elements: this.elements,
      confirmParams: {
        return_url: window.location.origin + '/checkout/result',
      }
    });
    if (error) {
      alert(error.message);
    }
    this.loading = false;
  }

  ngOnDestroy() {
    // Elements cleans up automatically when component unmounts
  }
}
```

```html
<!-- src/app/components/checkout/checkout.component.html -->
<div class="card">
  <h2>Checkout</h2>
  <div id="payment-element"></div>
  <button (click)="pay()" [disabled]="loading">
    {{ loading ? 'Processing...' : 'Pay' }}
  </button>
</div>
```

## 3) Handle the Result and Webhooks

After confirmPayment, Stripe redirects to return_url. You can read the status from the URL or load the PaymentIntent again on the server. For reliability, use webhooks: they tell your server when a payment actually succeeds or fails.

```bash
# Verify the webhook in your Stripe dashboard
# Set endpoint to: POST /api/payments/webhook
# Use the signing secret (whsec_...) in STRIPE_WEBHOOK_SECRET
```

## 4) Security and Best Practices

- Never trust client-provided amounts. Calculate on the server.
- Use Payment Intents + Stripe Elements for PCI compliance.
- Verify webhooks and update your database atomically.
- Use test cards like 4242 4242 4242 4242 in test mode.
- Store only Stripe IDs on your side; do not store raw card data.

## Done: From Start to First Payment

You now have a working, secure payment flow using Angular and Laravel with Stripe: backend creates PaymentIntents, frontend renders the Payment Element, and webhooks finalize the order. This pattern scales well to subscriptions, invoices, and on-session/off-session flows.
"##;
